//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the session with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line flags
//! - `factory` - Creates session adapters (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_session_ports, SessionPorts};

//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Session` - selections, env resolution, `before_start`, then the workflow
//! - `Workflow` - the mode state machine (build / upload / extract)

pub mod session;
pub mod workflow;

pub use session::{Session, SessionOutcome};
pub use workflow::{Workflow, DEFAULT_BUILD_HTML, SELECT_NEXT};

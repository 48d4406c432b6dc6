//! Workflow Module
//!
//! The mode state machine and its build/upload/extract actions.
//!
//! ## Usage
//!
//! ```ignore
//! use one_start::application::workflow::Workflow;
//!
//! let workflow = Workflow::new(&config, &ctx, &env, &cwd, &runner).with_hooks(&hooks);
//! workflow.run(&mut prompter)?;
//! ```

mod use_case;

pub use use_case::{Workflow, DEFAULT_BUILD_HTML, SELECT_NEXT};

//! Domain Services
//!
//! Pure logic operating on the run context. No terminal or process I/O
//! happens here except through the ports handed in by the caller.

mod resolver;
mod selection;
mod template;

pub use resolver::{build_env, EnvMap, EnvSpec, EnvValue, Resolvable};
pub use selection::{
    SelectionPipeline, DEVELOPMENT_STAGE, SELECT_HOST, SELECT_MODE, SELECT_STAGE,
};
pub use template::Template;

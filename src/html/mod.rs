//! HTML asset tags: extraction from a built document and re-encoding.

mod codec;
mod extract;

pub use codec::{encode, TagCodec};
pub use extract::extract;

#![forbid(unsafe_code)]

mod registry;
mod types;

pub use registry::*;
pub use types::*;

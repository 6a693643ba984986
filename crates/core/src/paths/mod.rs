#![forbid(unsafe_code)]

mod catalog_path;

pub use catalog_path::*;

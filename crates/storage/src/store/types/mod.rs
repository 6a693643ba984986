#![forbid(unsafe_code)]

mod entries;

pub use entries::*;

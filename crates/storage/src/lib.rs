#![forbid(unsafe_code)]

//! Versioned, path-addressed metadata catalog on SQLite.
//!
//! Every change appends an immutable row to the `catalog` table; reads resolve
//! the highest-id row per `(parent, name)` key as of a point in time.

mod store;

pub use store::*;

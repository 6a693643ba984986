#![forbid(unsafe_code)]

mod append;
mod children;
mod history;
mod latest;
mod rows;
mod search;
mod tombstone;

pub(in crate::store) use append::*;
pub(in crate::store) use children::*;
pub(in crate::store) use history::*;
pub(in crate::store) use latest::*;
pub(in crate::store) use rows::*;
pub(in crate::store) use search::*;
pub(in crate::store) use tombstone::*;

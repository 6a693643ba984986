#![forbid(unsafe_code)]

mod entries_tx;
mod json;
mod schema;
mod sessions;
mod time;

pub(super) use entries_tx::*;
pub(super) use json::*;
pub(super) use schema::install_schema;
pub(super) use sessions::*;
pub(super) use self::time::now_ms;

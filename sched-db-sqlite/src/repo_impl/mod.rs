// NOTE:
// All timestamps are stored as unix timestamp in seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use sched_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod event;
mod programme;
mod room;
mod time_slot;
mod view;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_timestamp(secs: i64) -> Timestamp {
    Timestamp::from_secs(secs)
}

fn store_timestamp(timestamp: Timestamp) -> i64 {
    timestamp.as_secs()
}

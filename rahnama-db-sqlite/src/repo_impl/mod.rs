// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use rahnama_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod advertisement;
mod category;
mod comment;
mod listing;
mod rating;

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

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::from_millis(millis).ok_or_else(|| anyhow!("Invalid timestamp: {millis}").into())
}

fn load_section(code: &str) -> Result<Section> {
    code.parse()
        .map_err(|_| anyhow!("Invalid section: {code}").into())
}

fn ids_to_rowids(ids: &[Id]) -> Vec<i64> {
    ids.iter().copied().map(Id::to_i64).collect()
}

#[macro_use]
extern crate log;

mod create_comment;
mod seed_categories;

pub mod prelude {
    pub use super::{create_comment::*, seed_categories::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rahnama_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rahnama_db_sqlite::Connections;
}

mod advertisements;
mod categories;
mod error;
mod filter_options;
mod load_listing;
mod query_listings;
mod rate_listing;

#[cfg(test)]
pub mod tests;

pub use self::{
    advertisements::*, categories::*, error::Error, filter_options::*, load_listing::*,
    query_listings::*, rate_listing::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        rating::Rated,
        repositories::{Error as RepoError, *},
    };
}

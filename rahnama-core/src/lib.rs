pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use rahnama_entities::{
        advertisement::*, category::*, comment::*, email::*, id::*, listing::*, lookup::*,
        rating::*, section::*, time::*, url::Url,
    };
}

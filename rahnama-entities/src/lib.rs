#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # rahnama-entities
//!
//! Reusable domain entities of the Rahnama business directory.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod advertisement;
pub mod category;
pub mod comment;
pub mod email;
pub mod id;
pub mod listing;
pub mod lookup;
pub mod rating;
pub mod section;
pub mod time;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;

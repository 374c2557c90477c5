use crate::{repositories, util::validate::CommentInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid comment: {0:?}")]
    InvalidComment(CommentInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<CommentInvalidation> for Error {
    fn from(from: CommentInvalidation) -> Self {
        Self::InvalidComment(from)
    }
}

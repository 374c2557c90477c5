use rahnama_application::error::{AppError, BError};
pub use rahnama_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    fn status(&self) -> Status {
        match self {
            Self::App(AppError::Business(BError::Repo(RepoError::NotFound))) => Status::NotFound,
            _ => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> response::Result<'o> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("Error: {self}");
        } else {
            debug!("{status}: {self}");
        }
        // The body is rendered by the registered catcher
        Err(status)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        AppError::from(err).into()
    }
}

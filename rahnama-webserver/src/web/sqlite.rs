use rahnama_db_sqlite::Connections as ConnectionPool;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use std::ops::Deref;

/// Request guard for the managed database connection pool.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = &'static str;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                error!("No database connections are managed by this instance");
                Outcome::Error((Status::InternalServerError, "database unavailable"))
            }
        }
    }
}

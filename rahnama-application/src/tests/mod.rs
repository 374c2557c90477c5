pub mod prelude {
    pub use rahnama_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use rahnama_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self::with_database_url(":memory:")
        }

        pub fn with_database_url(url: &str) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(url, 1).unwrap();
            rahnama_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_listing(&self, section: Section) -> Id {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_listing(
                    Listing::build()
                        .name("Test")
                        .section(section)
                        .finish_new(),
                )
                .unwrap()
        }
    }
}

use rocket::{config::Config as RocketCfg, local::blocking::Client, Catcher, Route};

use crate::web::{sqlite, Cfg};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use rahnama_core::{entities::*, repositories::*, usecases};
    pub use rahnama_entities::builders::*;

    pub use super::{rocket_test_setup, setup};
    pub(in crate::web) use crate::web::sqlite;
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<Catcher>,
    cfg: Cfg,
) -> (Client, sqlite::Connections) {
    let connections = rahnama_db_sqlite::Connections::init(":memory:", 1).unwrap();
    rahnama_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        catchers,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let rocket = super::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn setup() -> (Client, sqlite::Connections) {
    rocket_test_setup(super::mounts(), super::frontend::catchers(), Cfg::default())
}

mod media {
    use std::fs;

    use super::{prelude::*, *};

    #[test]
    fn serve_uploaded_files_from_media_dir() {
        let media_dir = std::env::temp_dir().join(format!("rahnama-media-{}", std::process::id()));
        fs::create_dir_all(media_dir.join("gyms")).unwrap();
        fs::write(media_dir.join("gyms").join("photo.txt"), "photo").unwrap();
        let cfg = Cfg {
            media_dir: Some(media_dir.clone()),
        };
        let (client, _db) =
            rocket_test_setup(crate::web::mounts(), crate::web::frontend::catchers(), cfg);
        let response = client.get("/media/gyms/photo.txt").dispatch();
        assert_eq!(Status::Ok, response.status());
        assert_eq!(Some("photo".to_owned()), response.into_string());
        let response = client.get("/media/gyms/missing.txt").dispatch();
        assert_eq!(Status::NotFound, response.status());
        fs::remove_dir_all(media_dir).unwrap();
    }

    #[test]
    fn missing_media_dir_is_not_mounted() {
        let cfg = Cfg {
            media_dir: Some(std::env::temp_dir().join("rahnama-media-does-not-exist")),
        };
        let (client, _db) =
            rocket_test_setup(crate::web::mounts(), crate::web::frontend::catchers(), cfg);
        let response = client.get("/media/gyms/photo.jpg").dispatch();
        assert_eq!(Status::NotFound, response.status());
    }
}

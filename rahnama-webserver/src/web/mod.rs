use std::path::PathBuf;

use rocket::{config::Config as RocketCfg, fs::FileServer, Catcher, Rocket, Route};

mod error;
mod frontend;
mod sqlite;
mod trailing_slash;

#[cfg(test)]
pub mod tests;

pub use error::Error;

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Directory of uploaded images, resumes and advertisement media
    pub media_dir: Option<PathBuf>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<Catcher>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        catchers,
        rocket_cfg,
        cfg,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .attach(trailing_slash::TrailingSlash)
        .register("/", catchers);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    if let Some(media_dir) = cfg.media_dir {
        if media_dir.is_dir() {
            info!("Serving media files from {}", media_dir.display());
            instance = instance.mount("/media", FileServer::from(media_dir));
        } else {
            warn!(
                "Media directory {} does not exist, uploaded files are not served",
                media_dir.display()
            );
        }
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        catchers: frontend::catchers(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}

use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "rahnama.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&cfg_string)?
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::embedded_default()
                }
                _ => Err(err.into()),
            }?,
        };
        let mut cfg = Self::from_raw(raw_config, raw::Config::embedded_default()?)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            log::info!("Use database URL from {ENV_NAME_DB_URL}");
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }

    /// Fills every value that is missing in `from` with the one of `defaults`.
    fn from_raw(from: raw::Config, defaults: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;
        let db = db.unwrap_or_default();
        let default_db = defaults.db.unwrap_or_default();
        let webserver = webserver.unwrap_or_default();
        let default_webserver = defaults.webserver.unwrap_or_default();

        let conn_sqlite = db
            .connection_sqlite
            .or(default_db.connection_sqlite)
            .ok_or_else(|| anyhow!("Missing SQLite connection"))?;
        let conn_pool_size = db
            .connection_pool_size
            .or(default_db.connection_pool_size)
            .ok_or_else(|| anyhow!("Missing connection pool size"))?;
        if conn_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be greater than zero"));
        }
        let db = Db {
            conn_sqlite,
            conn_pool_size,
        };

        let webserver = WebServer {
            enable_cors: webserver
                .enable_cors
                .or(default_webserver.enable_cors)
                .unwrap_or_default(),
            media_dir: webserver.media_dir.or(default_webserver.media_dir),
        };

        Ok(Self { db, webserver })
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
    /// Uploaded images, resumes and advertisement media.
    pub media_dir: Option<PathBuf>,
}

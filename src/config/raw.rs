use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("rahnama.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
}

impl Config {
    pub fn embedded_default() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG_FILE)?)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub enable_cors: Option<bool>,
    pub media_dir: Option<PathBuf>,
}

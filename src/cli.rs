use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use rahnama_application::prelude as flows;
use rahnama_db_sqlite::Connections;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Rahnama business directory for gyms, restaurants and trainers")]
struct Cli {
    /// Configuration file (default: rahnama.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start the web server (default command)
    Serve,
    /// Create the missing navigation categories
    Seed,
}

pub async fn run() -> Result<()> {
    let Cli { config, command } = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    let connections = connect(&cfg)?;
    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = rahnama_webserver::Cfg {
                media_dir: cfg.webserver.media_dir,
            };
            rahnama_webserver::run(connections, cfg.webserver.enable_cors, web_cfg).await;
        }
        Command::Seed => {
            let created = flows::seed_categories(&connections)?;
            log::info!("Seeded {} categories", created.len());
        }
    }
    Ok(())
}

fn connect(cfg: &Config) -> Result<Connections> {
    log::info!(
        "Connecting to SQLite database {} (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    rahnama_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

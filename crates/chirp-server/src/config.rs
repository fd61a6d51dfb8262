use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration, read once at startup. Defaults match the
/// historical deployment: bind everywhere on 8080, `chirps.db` in the
/// working directory, pushes to the bellbird service.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub push_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("CHIRP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("CHIRP_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()?;
        let db_path: PathBuf = std::env::var("CHIRP_DB_PATH")
            .unwrap_or_else(|_| "chirps.db".into())
            .into();
        let push_url = std::env::var("CHIRP_PUSH_URL")
            .unwrap_or_else(|_| "https://bellbird.joinhandshake-internal.com".into());

        Ok(Self {
            host,
            port,
            db_path,
            push_url,
        })
    }
}

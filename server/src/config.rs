use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";
pub const DEFAULT_LOG_DIR: &str = "server/log";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `LISTEN_ADDR`, `FRONTEND_DIST` and `LOG_DIR`, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = listen_addr
            .parse()
            .with_context(|| format!("invalid LISTEN_ADDR: {listen_addr}"))?;

        let frontend_dist = lookup("FRONTEND_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIST));

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            listen_addr,
            frontend_dist,
            log_dir,
        })
    }
}

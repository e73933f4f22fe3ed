use std::sync::atomic::AtomicU64;

use crate::config::ServerConfig;

pub struct ServerState {
    pub config: ServerConfig,
    // Since startup, only used to tell requests apart in the log
    pub trips_received: AtomicU64,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            trips_received: AtomicU64::new(0),
        }
    }
}

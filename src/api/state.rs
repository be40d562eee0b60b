use tokio_rusqlite::Connection;

use crate::assist::KeyPool;
use crate::core::AppConfig;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    /// Provider keys for the content-assist proxy, rotated per request
    pub keypool: KeyPool,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        let keypool = KeyPool::new(config.assist_api_keys.clone());
        Self {
            db,
            config,
            keypool,
        }
    }
}

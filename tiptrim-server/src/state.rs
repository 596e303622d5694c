//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtConfig, JwtService};
use crate::config::Config;
use crate::db::DbService;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite pool, opened at start and closed at shutdown
    pub db: DbService,
    pub jwt: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt = JwtService::with_config(JwtConfig::from(&config));
        Self {
            db,
            jwt: Arc::new(jwt),
            config: Arc::new(config),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt
    }
}

//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. El pool se
//! construye una vez en `main` y se inyecta acá; no hay cliente global.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}

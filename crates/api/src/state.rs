use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally and the config
/// is behind one). The pool is opened once at startup and reused by every
/// repository operation; handlers never open their own connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stayvista_db::DbPool,
    /// Server configuration (environment, CORS, JWT).
    pub config: Arc<ServerConfig>,
}

//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}

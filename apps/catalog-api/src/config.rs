//! Configuration for Catalog API

use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

const DEFAULT_API_URL: &str = "http://localhost:8080/";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Prefix for product picture URLs
    pub api_url: String,
    /// Apply pending migrations (schema and seed data) at startup
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            api_url: env_or_default("API_URL", DEFAULT_API_URL),
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}

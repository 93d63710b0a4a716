use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ITEM_SERVICE_PORT: u16 = 8000;
pub const TASK_SERVICE_PORT: u16 = 8001;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}
impl ServiceConfig {
    /// Defaults overridden by `<PREFIX>_HOST` / `<PREFIX>_PORT`.
    pub fn load(prefix: &str, default_port: u16) -> Result<Self> {
        Self::load_from(Environment::with_prefix(prefix), default_port)
    }

    fn load_from(env: Environment, default_port: u16) -> Result<Self> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .add_source(env.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .context("invalid service configuration")
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

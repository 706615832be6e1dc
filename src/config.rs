use std::str::FromStr;

use serde_derive::Deserialize;
use simplelog::LevelFilter;

use crate::error::AppError;


pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_KIND: &str = "console";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "ackserver.log";


#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `console` or `file`
    pub kind: String,
    pub level: String,
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
}

impl Config {
    /// Built-in defaults, optionally overridden by a config file
    pub fn load(path: Option<&str>) -> Result<Config, AppError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("log.kind", DEFAULT_LOG_KIND)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .set_default("log.file", DEFAULT_LOG_FILE)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        Ok(builder.build()?.try_deserialize::<Config>()?)
    }

    pub fn log_level(&self) -> Result<LevelFilter, AppError> {
        LevelFilter::from_str(&self.log.level)
            .map_err(|_| AppError::Logger(format!("unknown log level `{}`", self.log.level)))
    }
}

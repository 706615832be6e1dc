use std::io;

use thiserror::Error;


/// Failure while handling a single request. The server answers with 500 and keeps serving.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Startup failure. Returned from `main`, so the process exits with a non-zero status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("could not bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

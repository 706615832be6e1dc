#[macro_use] extern crate log;

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod request;
pub mod server;
pub mod utils;

use clap::Parser;

use crate::config::Config;
use crate::error::AppError;


const MODULE: &str = "MAIN";

/// Tiny HTTP server answering GET and POST with fixed acknowledgements
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Path to an optional configuration file
    config_fn: Option<String>,
}


fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let cfg = Config::load(args.config_fn.as_deref())?;
    logger::init_logger(&cfg)?;

    if let Some(path) = &args.config_fn {
        info!("[{}] Config loaded from {}", MODULE, path);
    }

    server::run(&cfg)
}

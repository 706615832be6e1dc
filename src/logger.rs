use std::fmt::Display;
use std::fs::OpenOptions;

use simplelog::{ColorChoice, LevelFilter, TerminalMode, TermLogger, WriteLogger};

use crate::config::Config;
use crate::error::AppError;


const LOG_CONSOLE: &str = "console";
const LOG_FILE: &str = "file";


pub fn init_logger(cfg: &Config) -> Result<(), AppError> {
    let level = cfg.log_level()?;
    match cfg.log.kind.as_str() {
        LOG_CONSOLE => init_term_logger(level),
        LOG_FILE    => init_file_logger(level, &cfg.log.file),
        _           => {
            eprintln!(
                "Unsupported log type: {}, only `file` and `console` are supported. Use `console` by default",
                cfg.log.kind
            );
            init_term_logger(level)
        }
    }
}

/// Returns a `map_err` adapter that logs the error under `[module]` and turns it into a message
pub fn get_reporter<E: Display>(module: &'static str, action: &'static str) -> impl Fn(E) -> String {
    move |e: E| {
        let msg = format!("{}: {}", action, e);
        error!("[{}] {}", module, msg);
        msg
    }
}


fn prepare_logger_config() -> simplelog::Config {
    let mut builder = simplelog::ConfigBuilder::new();
    builder.set_time_format_custom(
        simplelog::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        )
    );
    if builder.set_time_offset_to_local().is_err() {
        eprintln!("Could not determine local time offset, log timestamps are in UTC");
    }
    builder.build()
}

fn init_term_logger(level: LevelFilter) -> Result<(), AppError> {
    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr, ColorChoice::Auto
    ).map_err(|e| AppError::Logger(e.to_string()))
}

fn init_file_logger(level: LevelFilter, filename: &str) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(filename)
        .map_err(|e| AppError::Logger(format!("could not open log file {}: {}", filename, e)))?;

    WriteLogger::init(level, prepare_logger_config(), file)
        .map_err(|e| AppError::Logger(e.to_string()))
}

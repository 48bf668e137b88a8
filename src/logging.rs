use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

pub fn parse_level(level: &str) -> Result<LevelFilter, Box<dyn Error>> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level {level:?}").into())
}

/// Terminal logging through env_logger (`RUST_LOG` still applies on top of
/// `level`); with a log file, a terminal + file pair through simplelog.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match file {
        Some(path) => {
            let out = File::create(path)
                .map_err(|e| format!("creating log file {}: {e}", path.display()))?;
            let config = simplelog::Config::default();
            CombinedLogger::init(vec![
                TermLogger::new(level, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(level, config, out),
            ])?;
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .try_init()?;
        }
    }
    Ok(())
}

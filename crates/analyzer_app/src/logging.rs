//! Logging initialization for analyzer_app.
//!
//! Writes logs to `./analyzer.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Environment variable selecting the log destination
/// (`file` | `terminal` | `both`; anything else falls back to `file`).
pub const LOG_DESTINATION_ENV: &str = "ANALYZER_LOG";

/// Destination for log output.
pub enum LogDestination {
    /// Write to ./analyzer.log in current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Destination selected by [`LOG_DESTINATION_ENV`], defaulting to the
/// log file when the variable is unset or unrecognized.
pub fn destination_from_env() -> LogDestination {
    match std::env::var(LOG_DESTINATION_ENV)
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "terminal" => LogDestination::Terminal,
        "both" => LogDestination::Both,
        _ => LogDestination::File,
    }
}

/// Initialize the logger with the specified destination.
///
/// For `LogDestination::File` or `Both`, creates `./analyzer.log` in the
/// current working directory.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => {
            if let Some(file_logger) = create_file_logger(level, config) {
                vec![file_logger]
            } else {
                return;
            }
        }
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from("./analyzer.log");
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_env_values_map_to_variants() {
        std::env::set_var(LOG_DESTINATION_ENV, "terminal");
        assert!(matches!(destination_from_env(), LogDestination::Terminal));

        std::env::set_var(LOG_DESTINATION_ENV, "Both");
        assert!(matches!(destination_from_env(), LogDestination::Both));

        std::env::set_var(LOG_DESTINATION_ENV, "nonsense");
        assert!(matches!(destination_from_env(), LogDestination::File));

        std::env::remove_var(LOG_DESTINATION_ENV);
        assert!(matches!(destination_from_env(), LogDestination::File));
    }
}


// ============================================================================
// portapack-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Log Dispatch
//
// The `log` facade is configured once at startup with fern:
// - stderr: diagnostics only (errors by default, everything with --verbose).
//   Messages the Console already printed are filtered out here.
// - file (optional, --log-dir): every record, including Console messages,
//   with timestamps.
//
// AI-ASSISTANT-INFO: Logging initialisation and timestamp helpers

use crate::error::CliResult;
use crate::terminal::CONSOLE_LOG_TARGET;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("portapack_{}.log", portapack_cli::logging::get_timestamp());
/// assert!(log_filename.starts_with("portapack_"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of the log file created for this run inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("portapack_{}.log", get_timestamp()))
}

/// Installs the global logger. Returns the log file path when one is used.
pub fn init_logging(verbose: bool, use_color: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let stderr_level = if verbose { LevelFilter::Debug } else { LevelFilter::Error };

    let stderr_chain = fern::Dispatch::new()
        .level(stderr_level)
        .filter(|metadata| metadata.target() != CONSOLE_LOG_TARGET)
        .format(move |out, message, record| {
            let level = format!("{:<5}", record.level());
            let level = if use_color { colorize_level(record.level(), &level) } else { level };
            out.finish(format_args!(
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S"),
                level,
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new().level(LevelFilter::Debug).chain(stderr_chain);

    let log_file = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = log_file_path(dir);
            let file_chain = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        message
                    ))
                })
                .chain(fern::log_file(&path)?);
            dispatch = dispatch.chain(file_chain);
            Some(path)
        }
        None => None,
    };

    dispatch.apply().map_err(fern::InitError::SetLoggerError)?;
    log::debug!("Logger initialized (stderr level: {})", stderr_level);
    Ok(log_file)
}

fn colorize_level(level: Level, text: &str) -> String {
    match level {
        Level::Error => text.bright_red().to_string(),
        Level::Warn => text.yellow().to_string(),
        Level::Info => text.green().to_string(),
        Level::Debug => text.blue().to_string(),
        Level::Trace => text.magenta().to_string(),
    }
}

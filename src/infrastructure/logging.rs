//! Diagnostic logging bootstrap.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! Initialization happens at most once per process; later calls are no-ops
//! when they ask for the same level and are rejected otherwise.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

pub const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Start logging at `level` (one of off, error, warn, info, debug, trace).
///
/// # Errors
/// - `level` is not a supported level name.
/// - Logging was already started with a different level.
/// - The logger backend fails to start.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(&level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        debug!(
            "event=logging_init level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: level.clone(),
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }

    Ok(())
}

fn normalize_level(level: &str) -> Result<String, String> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!(
            "unsupported log level `{}`; expected one of {}",
            level,
            SUPPORTED_LEVELS.join(", ")
        ))
    }
}

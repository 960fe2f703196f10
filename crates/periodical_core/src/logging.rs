//! File logging bootstrap for executables embedding the catalog core.
//!
//! # Responsibility
//! - Start rotating file logs at most once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Initialization never panics.
//! - Repeating initialization with the same level and directory is a no-op.
//! - Switching level or directory after initialization is rejected.
//! - Library code only emits through `log` macros; it never initializes.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "periodical";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    config: LogConfig,
    _logger: LoggerHandle,
}

/// Normalized logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogConfig {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogConfig {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    fn ensure_same_as(&self, requested: &LogConfig) -> Result<(), String> {
        if self.log_dir != requested.log_dir {
            return Err(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                requested.log_dir.display()
            ));
        }
        if self.level != requested.level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.level, requested.level
            ));
        }
        Ok(())
    }
}

/// Initializes file logging with `level` under the absolute `log_dir`.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` is empty, relative, or cannot be created.
/// - Logging is already active with a different level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogConfig::parse(level, log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(requested.clone()))?;
    state.config.ensure_same_as(&requested)
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.config.level, state.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: LogConfig) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            config.log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(config.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config,
        _logger: logger,
    })
}

const ACCEPTED_LEVELS: &[(&str, &str)] = &[
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let requested = level.trim().to_ascii_lowercase();
    ACCEPTED_LEVELS
        .iter()
        .find(|(alias, _)| *alias == requested)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| {
            format!("unknown log level `{requested}` (use trace, debug, info, warn or error)")
        })
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let path = Path::new(log_dir.trim());
    if path.as_os_str().is_empty() {
        return Err("log directory is empty".to_string());
    }
    if path.is_relative() {
        return Err(format!(
            "log directory `{}` is relative; pass an absolute path",
            path.display()
        ));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let at = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "-".to_string());
        let message = panic_message(panic_info.payload())
            .map(|text| single_line(text, MAX_PANIC_PAYLOAD_CHARS))
            .unwrap_or_else(|| "<opaque>".to_string());
        error!("event=panic module=process status=error at={at} message={message}");
        previous_hook(panic_info);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Blanks control characters and keeps at most `max_chars`, noting how many
/// were dropped so a panic always fits on one log line.
fn single_line(value: &str, max_chars: usize) -> String {
    let mut line: String = value
        .chars()
        .take(max_chars)
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let dropped = value.chars().count().saturating_sub(max_chars);
    if dropped > 0 {
        line.push_str(&format!(" [+{dropped} chars]"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_dir, panic_message,
        single_line,
    };
    use std::any::Any;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("verbose").unwrap_err().contains("verbose"));
    }

    #[test]
    fn normalize_log_dir_rejects_relative_and_empty_paths() {
        let error = normalize_log_dir("logs/dev").unwrap_err();
        assert!(error.contains("relative"));
        assert_eq!(normalize_log_dir("   ").unwrap_err(), "log directory is empty");
    }

    #[test]
    fn single_line_blanks_control_chars_and_reports_dropped_count() {
        assert_eq!(single_line("a\nb\tc", 16), "a b c");
        assert_eq!(single_line("line1\nline2", 5), "line1 [+6 chars]");
    }

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let borrowed: Box<dyn Any + Send> = Box::new("boom");
        let owned: Box<dyn Any + Send> = Box::new("bang".to_string());
        let opaque: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(borrowed.as_ref()), Some("boom"));
        assert_eq!(panic_message(owned.as_ref()), Some("bang"));
        assert_eq!(panic_message(opaque.as_ref()), None);
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().expect("temp dir should be created");
        let other_dir = tempfile::tempdir().expect("temp dir should be created");
        let log_dir_str = log_dir.path().to_str().expect("utf-8 temp path");
        let other_dir_str = other_dir.path().to_str().expect("utf-8 temp path");

        init_logging("info", log_dir_str).expect("first init should succeed");
        init_logging("info", log_dir_str).expect("same config should be idempotent");

        let level_error = init_logging("debug", log_dir_str).unwrap_err();
        assert!(level_error.contains("refusing to switch"));

        let dir_error = init_logging("info", other_dir_str).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (active_level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(active_level, "info");
        assert_eq!(active_dir, log_dir.path());
    }
}

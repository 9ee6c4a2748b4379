// LeadDeck - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, plus an append-only log file when [logging] file is set.
// Lead names and emails are only ever logged at debug/trace.

use super::error::LeadDeckError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolve the active filter directive.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn resolve_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Create the log file (and its directory) so the appender can open it.
///
/// Returns the directory and file name the appender is built from.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, String), LeadDeckError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| LeadDeckError::Io {
            path: path.to_path_buf(),
            operation: "resolve log file name",
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

    std::fs::create_dir_all(&dir).map_err(|e| LeadDeckError::Io {
        path: dir.clone(),
        operation: "create log directory",
        source: e,
    })?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LeadDeckError::Io {
            path: path.to_path_buf(),
            operation: "open log file",
            source: e,
        })?;

    Ok((dir, file_name))
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` adds a plain-text file layer next to stderr.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. On error nothing has been installed, so the
/// caller can retry without a file.
pub fn init(
    debug_flag: bool,
    config_level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, LeadDeckError> {
    let file_target = log_file.map(prepare_log_file).transpose()?;

    let filter = resolve_filter(debug_flag, config_level);
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file_target {
        Some((dir, file_name)) => {
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init: a second call (e.g. from tests) must not panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        log_file = ?log_file,
        "Logging initialised"
    );
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_file_creates_nested_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("leaddeck.log");
        let (dir, name) = prepare_log_file(&path).unwrap();
        assert_eq!(dir, tmp.path().join("logs"));
        assert_eq!(name, "leaddeck.log");
        assert!(path.is_file());
    }

    #[test]
    fn test_prepare_log_file_keeps_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("leaddeck.log");
        std::fs::write(&path, "earlier run\n").unwrap();
        prepare_log_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier run\n");
    }

    #[test]
    fn test_prepare_log_file_under_a_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        let err = prepare_log_file(&blocker.join("leaddeck.log")).unwrap_err();
        match err {
            LeadDeckError::Io { operation, .. } => assert_eq!(operation, "create log directory"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_with_log_file_returns_guard() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.log");
        let guard = init(false, Some("info"), Some(path.as_path())).unwrap();
        assert!(guard.is_some());
        assert!(path.is_file());
    }
}

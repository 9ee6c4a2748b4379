// LeadDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its cause so the
// full chain reaches the diagnostic log.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LeadDeck operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LeadDeckError {
    /// Fetching or decoding leads from the source failed.
    Load(LoadError),

    /// Export operation failed or was rejected.
    Export(ExportError),

    /// I/O error with path context (e.g. preparing the log file).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LeadDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LeadDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised at the lead source boundary. None of these are fatal: the
/// store keeps its previous collection and the message is shown to the user.
#[derive(Debug)]
pub enum LoadError {
    /// The HTTP request failed (connection, TLS, or non-2xx status).
    Http {
        url: String,
        source: Box<ureq::Error>,
    },

    /// Reading the response body failed.
    Body { url: String, source: io::Error },

    /// The response body exceeded the configured maximum.
    ResponseTooLarge { url: String, max_bytes: usize },

    /// The payload was not the expected JSON shape.
    Parse { source: serde_json::Error },

    /// The background loader exited without reporting a result.
    WorkerDisconnected,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, source } => write!(f, "Request to '{url}' failed: {source}"),
            Self::Body { url, source } => {
                write!(f, "Could not read response from '{url}': {source}")
            }
            Self::ResponseTooLarge { url, max_bytes } => write!(
                f,
                "Response from '{url}' exceeded the maximum of {max_bytes} bytes"
            ),
            Self::Parse { source } => write!(f, "Lead data is not valid: {source}"),
            Self::WorkerDisconnected => {
                write!(f, "Lead loader stopped before delivering a result")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source.as_ref()),
            Self::Body { source, .. } => Some(source),
            Self::Parse { source } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for LeadDeckError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting the visible leads.
#[derive(Debug)]
pub enum ExportError {
    /// The visible set is empty; no file is produced.
    NothingToExport,

    /// I/O error creating or writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToExport => write!(f, "No data to export!"),
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::NothingToExport => None,
        }
    }
}

impl From<ExportError> for LeadDeckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading config.toml. These never abort startup:
/// `load_config` renders them as warnings and falls back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for LeadDeck results.
pub type Result<T> = std::result::Result<T, LeadDeckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_nothing_to_export_message() {
        assert_eq!(ExportError::NothingToExport.to_string(), "No data to export!");
    }

    #[test]
    fn test_export_error_preserves_source_chain() {
        let err: LeadDeckError = ExportError::Io {
            path: PathBuf::from("out.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let export = err.source().expect("export error in chain");
        assert!(export.source().is_some());
        assert!(err.to_string().contains("out.csv"));
    }

    #[test]
    fn test_config_range_error_display() {
        let err = ConfigError::ValueOutOfRange {
            field: "source.timeout_secs".to_string(),
            value: "0".to_string(),
            expected: "1-300".to_string(),
        };
        assert!(err.to_string().contains("source.timeout_secs"));
        assert!(err.source().is_none());
    }
}

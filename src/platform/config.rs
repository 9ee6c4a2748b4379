// LeadDeck - platform/config.rs
//
// Platform directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LeadDeck configuration and exports.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/leaddeck/ or %APPDATA%\LeadDeck\config\)
    pub config_dir: PathBuf,

    /// Data directory.
    pub data_dir: PathBuf,

    /// Default CSV export directory.
    pub export_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let export_dir = data_dir.join(constants::EXPORTS_DIR_NAME);

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                exports = %export_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
                export_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                export_dir: fallback.join(constants::EXPORTS_DIR_NAME),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are ignored so a newer config file still loads in an older
/// binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub source: SourceSection,
    pub loading: LoadingSection,
    pub export: ExportSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Endpoint returning a JSON array of user records.
    pub url: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[loading]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoadingSection {
    /// Seed for tag and connection draws. Absent = cyclic tag assignment.
    pub tag_seed: Option<u64>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Directory receiving CSV exports.
    pub directory: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path. Relative paths are resolved against the config directory.
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Source --
    pub source_url: String,
    pub source_timeout_secs: u64,

    // -- Loading --
    /// `None` selects the cyclic tag policy.
    pub tag_seed: Option<u64>,

    // -- Export --
    /// `None` means the platform export directory.
    pub export_dir: Option<PathBuf>,

    // -- UI --
    pub dark_mode: bool,
    pub font_size: f32,

    // -- Logging --
    pub log_level: Option<String>,
    /// `None` logs to stderr only.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: constants::DEFAULT_SOURCE_URL.to_string(),
            source_timeout_secs: constants::DEFAULT_SOURCE_TIMEOUT_SECS,
            tag_seed: None,
            export_dir: None,
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` from `config_dir`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An
/// unparseable file yields defaults plus a warning; the application still
/// starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, config_dir, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, config_dir: &Path, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Source: url --
    if let Some(url) = raw.source.url {
        if url.starts_with("http://") || url.starts_with("https://") {
            config.source_url = url;
        } else {
            warnings.push(format!(
                "[source] url = \"{url}\" must start with http:// or https://. Using default ({}).",
                constants::DEFAULT_SOURCE_URL,
            ));
        }
    }

    // -- Source: timeout_secs --
    if let Some(secs) = raw.source.timeout_secs {
        if (constants::MIN_SOURCE_TIMEOUT_SECS..=constants::MAX_SOURCE_TIMEOUT_SECS).contains(&secs)
        {
            config.source_timeout_secs = secs;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "source.timeout_secs".to_string(),
                value: secs.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_SOURCE_TIMEOUT_SECS,
                    constants::MAX_SOURCE_TIMEOUT_SECS
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_SOURCE_TIMEOUT_SECS
            ));
        }
    }

    config.tag_seed = raw.loading.tag_seed;

    // -- Export: directory --
    if let Some(dir) = raw.export.directory {
        if !dir.trim().is_empty() {
            config.export_dir = Some(PathBuf::from(dir));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (light).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        let trimmed = file.trim();
        if trimmed.is_empty() {
            warnings.push("[logging] file is empty. Logging to stderr only.".to_string());
        } else {
            let path = PathBuf::from(trimmed);
            config.log_file = Some(if path.is_absolute() {
                path
            } else {
                config_dir.join(path)
            });
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) {
        std::fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(tmp.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(
            tmp.path(),
            r#"
            [source]
            url = "https://leads.example.com/users"
            timeout_secs = 30

            [loading]
            tag_seed = 7

            [export]
            directory = "/tmp/lead-exports"

            [ui]
            theme = "dark"
            font_size = 16.0

            [logging]
            level = "DEBUG"
            "#,
        );
        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.source_url, "https://leads.example.com/users");
        assert_eq!(config.source_timeout_secs, 30);
        assert_eq!(config.tag_seed, Some(7));
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/lead-exports")));
        assert!(config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(
            tmp.path(),
            r#"
            [source]
            url = "ftp://nope"
            timeout_secs = 0

            [ui]
            theme = "solarized"
            font_size = 100.0
            "#,
        );
        let (config, warnings) = load_config(tmp.path());
        assert_eq!(warnings.len(), 4);
        assert_eq!(config.source_url, constants::DEFAULT_SOURCE_URL);
        assert_eq!(
            config.source_timeout_secs,
            constants::DEFAULT_SOURCE_TIMEOUT_SECS
        );
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_unparseable_file_gives_defaults_with_warning() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[source\nurl = ");
        let (config, warnings) = load_config(tmp.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_log_file_relative_to_config_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[logging]\nfile = \"logs/leaddeck.log\"\n");
        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(
            config.log_file,
            Some(tmp.path().join("logs").join("leaddeck.log"))
        );
    }

    #[test]
    fn test_log_file_absolute_kept_and_empty_warns() {
        let tmp = tempfile::tempdir().unwrap();
        let absolute = tmp.path().join("elsewhere.log");
        write_config(
            tmp.path(),
            &format!("[logging]\nfile = '{}'\n", absolute.display()),
        );
        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_file, Some(absolute));

        write_config(tmp.path(), "[logging]\nfile = \"  \"\n");
        let (config, warnings) = load_config(tmp.path());
        assert_eq!(config.log_file, None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "[future]\nflag = true\n");
        let (_, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty());
    }
}

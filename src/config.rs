//! qrgen runtime configuration handling

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// URL encoded when the CLI is invoked without an explicit `--url`.
pub const DEFAULT_URL: &str = "https://github.com/kaw393939";

/// Directory under the working directory that receives rendered images.
pub const DEFAULT_OUTPUT_DIR: &str = "qr_codes";

/// File name of the rendered image inside the output directory.
pub const DEFAULT_OUTPUT_FILE: &str = "qr_code.png";

/// Log file written alongside console output.
pub const DEFAULT_LOG_FILE: &str = "qrgen.log";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration structure loaded from disk or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrgenConfig {
    /// Output location configuration
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for QrgenConfig {
    fn default() -> Self {
        Self {
            output: OutputOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl QrgenConfig {
    /// Load configuration from a discovered file or fall back to defaults.
    pub fn load() -> Result<Self> {
        let mut config = if let Some(path) = Self::discover_file()? {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        let candidate = cwd.join("qrgen.toml");
        if candidate.exists() {
            return Ok(Some(candidate));
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let candidate = PathBuf::from(xdg_config).join("qrgen").join("config.toml");
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete TOML file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Full path of the rendered image: output directory joined with the file name.
    pub fn output_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.filename)
    }
}

/// Where the rendered QR image is written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory receiving rendered images, created on demand. Relative paths
    /// resolve against the current working directory.
    pub directory: PathBuf,
    /// File name of the rendered image inside `directory`. The extension
    /// selects the image format (png by default).
    pub filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filename: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("QRGEN_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.directory = PathBuf::from(dir);
            }
        }
        if let Ok(filename) = env::var("QRGEN_OUTPUT_FILE") {
            if !filename.trim().is_empty() {
                self.filename = filename;
            }
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRGEN_LOG_LEVEL`)
    pub level: String,
    /// Log file teeing console output to disk; `None` disables the file sink
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRGEN_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRGEN_LOG_FILE") {
            if file.trim().is_empty() {
                self.file = None;
            } else {
                self.file = Some(PathBuf::from(file));
            }
        }
        if let Ok(color) = env::var("QRGEN_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRGEN_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_fixed_behavior() {
        let config = QrgenConfig::default();
        assert_eq!(config.output.directory, PathBuf::from("qr_codes"));
        assert_eq!(config.output.filename, "qr_code.png");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, Some(PathBuf::from("qrgen.log")));
        assert!(config.logging.color);
        assert!(config.logging.rotation.is_none());
    }

    #[test]
    fn test_output_path_joins_directory_and_filename() {
        let config = QrgenConfig::default();
        assert_eq!(config.output_path(), PathBuf::from("qr_codes/qr_code.png"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: QrgenConfig = toml::from_str(
            r#"
            [output]
            directory = "images"
            "#,
        )
        .expect("parse partial config");

        assert_eq!(config.output.directory, PathBuf::from("images"));
        assert_eq!(config.output.filename, "qr_code.png");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rotation_parses_lowercase() {
        let config: QrgenConfig = toml::from_str(
            r#"
            [logging]
            rotation = "daily"
            "#,
        )
        .expect("parse rotation");

        assert_eq!(config.logging.rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn test_from_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"output = not-a-table").expect("write");

        let result = QrgenConfig::from_file(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_file_reads_full_config() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"
            [output]
            directory = "out"
            filename = "code.png"

            [logging]
            level = "debug"
            color = false
            "#,
        )
        .expect("write");

        let config = QrgenConfig::from_file(file.path()).expect("parse config");
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.output.filename, "code.png");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.color);
    }
}

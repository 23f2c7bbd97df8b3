//! Settings loaded from `config.toml`.
//!
//! Every key is optional. Command line flags take precedence.
//!
//! ```toml
//! format = "text"
//! collection = false
//! checkboxes = true
//! pretty = false
//! log_level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::args::OutputFormat;
use crate::error::CliError;
use crate::paths;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub format: OutputFormat,
    pub collection: bool,
    pub checkboxes: bool,
    pub pretty: bool,
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from an explicit path, or from the default config file
    /// if it exists. An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::read(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path.to_path_buf())
    }

    fn parse(text: &str, path: PathBuf) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::ConfigParse { path, source })
    }
}

/// Resolve the log level: flag first, then config, then `info`.
pub fn log_level(flag: Option<&str>, settings: &Settings) -> Result<LevelFilter, CliError> {
    match flag.or(settings.log_level.as_deref()) {
        Some(level) => {
            LevelFilter::from_str(level).map_err(|_| CliError::LogLevel(level.to_string()))
        }
        None => Ok(DEFAULT_LOG_LEVEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Settings, CliError> {
        Settings::parse(text, PathBuf::from("config.toml"))
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let settings = parse(
            r#"
            format = "text"
            collection = true
            checkboxes = true
            pretty = true
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.collection);
        assert!(settings.checkboxes);
        assert!(settings.pretty);
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            parse("colour = true"),
            Err(CliError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(matches!(
            parse(r#"format = "pdf""#),
            Err(CliError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = Settings::load(Some(Path::new("/nonexistent/bookbrainz.toml")));
        assert!(matches!(result, Err(CliError::ConfigRead { .. })));
    }

    #[test]
    fn test_log_level_precedence() {
        let settings = Settings {
            log_level: Some("warn".to_string()),
            ..Default::default()
        };

        assert_eq!(log_level(Some("debug"), &settings).unwrap(), LevelFilter::Debug);
        assert_eq!(log_level(None, &settings).unwrap(), LevelFilter::Warn);
        assert_eq!(log_level(None, &Settings::default()).unwrap(), LevelFilter::Info);
        assert!(matches!(
            log_level(Some("loud"), &settings),
            Err(CliError::LogLevel(_))
        ));
    }
}

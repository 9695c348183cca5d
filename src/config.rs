use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::DEFAULT_NAME;

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// base = "/app"
/// default_name = "depression"
/// genre_field = "fav_genre"
/// log_filter = "scatterscope=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Prefix every navigable path lives under.
    pub base: String,
    /// Starting value of the counter store's name.
    pub default_name: String,
    /// Record field holding a record's genre.
    pub genre_field: String,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base: "/".into(),
            default_name: DEFAULT_NAME.into(),
            genre_field: "genre".into(),
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Load `path` if given, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base, "/");
        assert_eq!(config.default_name, "depression");
        assert_eq!(config.genre_field, "genre");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("base = \"/app\"\ngenre_field = \"fav_genre\"\n");
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.base, "/app");
        assert_eq!(config.genre_field, "fav_genre");
        assert_eq!(config.default_name, "depression");
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("");
        assert_eq!(AppConfig::load(file.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("colour = \"blue\"\n");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(AppConfig::load(&missing), Err(Error::ConfigIo { .. })));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}

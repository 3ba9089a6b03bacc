use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Path of the optional config file, kept next to the label file.
pub fn config_path(csv_path: &Path) -> PathBuf {
    csv_path
        .parent()
        .unwrap_or(Path::new("."))
        .join("labelmark.toml")
}

/// Read the config for the given label file. A missing config file yields
/// the defaults; an unreadable or malformed one is an error.
pub fn read_config(csv_path: &Path) -> Result<Config, ConfigError> {
    let path = config_path(csv_path);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(&tmp.path().join("labels.csv")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_is_read_from_csv_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("labelmark.toml"), "[ui]\nradius = 9\n").unwrap();

        let config = read_config(&tmp.path().join("labels.csv")).unwrap();
        assert_eq!(config.ui.radius, 9);
        assert_eq!(config.ui.page, 20);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("labelmark.toml"), "[ui\nradius = 9\n").unwrap();

        let err = read_config(&tmp.path().join("labels.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("labelmark.toml"));
    }

    #[test]
    fn config_path_is_beside_the_csv() {
        assert_eq!(
            config_path(Path::new("/data/run7/labels.csv")),
            PathBuf::from("/data/run7/labelmark.toml")
        );
        assert_eq!(config_path(Path::new("ff.csv")), PathBuf::from("labelmark.toml"));
    }
}

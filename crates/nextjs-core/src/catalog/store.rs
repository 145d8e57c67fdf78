//! Loading the catalog from an on-disk `config.json`

use super::Catalog;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "NEXTJS_CLI_CONFIG";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Config file not found: {path}")]
    Missing { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Resolve the config file path: `$NEXTJS_CLI_CONFIG`, else `./config.json`
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"))
}

/// Read and parse a catalog file
pub fn load_from(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reports_missing() {
        let dir = TempDir::new().unwrap();
        let result = load_from(&dir.path().join("config.json"));
        assert!(matches!(result, Err(CatalogError::Missing { .. })));
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(load_from(&path), Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_minimal_config_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"repositories": [], "users": []}"#).unwrap();

        let catalog = load_from(&path).unwrap();
        assert!(catalog.repositories.is_empty());
        assert!(catalog.components.is_empty());
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryStructure;

use super::types::SalaryConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary.yaml").unwrap();
/// let structure = loader.default_structure();
/// println!("Default PF rate: {}", structure.pf_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalaryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file does not exist
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: SalaryConfig =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader with the built-in defaults, bypassing the filesystem.
    pub fn built_in() -> Self {
        Self {
            config: SalaryConfig::default(),
        }
    }

    /// The structure applied to employees without a custom one.
    pub fn default_structure(&self) -> &SalaryStructure {
        &self.config.default_structure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/salary.yaml").unwrap();
        assert_eq!(*loader.default_structure(), SalaryStructure::default());
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist.yaml");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("does-not-exist"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("salary_engine_bad_config.yaml");
        fs::write(&path, "defaultStructure: [not, a, structure]").unwrap();

        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigParseError { .. }
        ));
    }

    #[test]
    fn test_built_in_matches_default_structure() {
        let loader = ConfigLoader::built_in();
        assert_eq!(*loader.default_structure(), SalaryStructure::default());
    }
}

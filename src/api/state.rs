//! Application state for the salary engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::SalaryStructure;

/// Shared application state, cloned into every handler.
///
/// The configuration is immutable after startup; handlers only read the
/// default salary structure out of it, so a plain `Arc` suffices.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates the application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The structure applied when a request or employee carries none.
    pub fn default_structure(&self) -> &SalaryStructure {
        self.config.default_structure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state extraction
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_structure_shortcut() {
        let state = AppState::new(ConfigLoader::built_in());
        assert_eq!(*state.default_structure(), SalaryStructure::default());
    }
}

//! Application state for the liquidation API.

use std::sync::Arc;

use crate::config::CaseConfig;

/// Shared application state.
///
/// Holds the case configuration loaded at startup; requests evaluate against
/// it unless they bring their own.
#[derive(Clone)]
pub struct AppState {
    config: Arc<CaseConfig>,
}

impl AppState {
    /// Creates a new application state with the given case configuration.
    pub fn new(config: CaseConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the server's case configuration.
    pub fn config(&self) -> &CaseConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }
}

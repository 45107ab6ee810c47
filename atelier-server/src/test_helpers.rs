//! Shared fixtures for handler and router tests.

use atelier_core::AppConfig;

use crate::state::AppState;

pub fn test_state() -> AppState {
    test_state_with(AppConfig::default())
}

pub fn test_state_with(config: AppConfig) -> AppState {
    AppState::new(config).expect("test state builds")
}

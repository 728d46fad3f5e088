use std::time::Duration;

use common::listing_const::TEXT_DEBOUNCE_MS;

/// Per-page engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Quiet period before typed text lands in the inquiry.
    pub debounce: Duration,
    /// Personal listings (own properties, favorites) never fetch for an
    /// anonymous viewer.
    pub requires_session: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(TEXT_DEBOUNCE_MS),
            requires_session: false,
        }
    }
}

impl EngineConfig {
    pub fn personal() -> Self {
        Self { requires_session: true, ..Self::default() }
    }
}

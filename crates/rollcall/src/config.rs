//! Call-time configuration

use serde::Deserialize;

/// Preset used when a tenant has no (valid) theme selected.
pub const DEFAULT_PRESET_ID: &str = "corporate";

/// How many records the history view keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Length of the dashboard trend window, in days.
pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Configuration passed into the settings, history and stats operations.
///
/// Nothing in this crate reads ambient state; hosts build one of these
/// (usually via [`Default`] or by deserializing their own config file) and
/// hand it in at call time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RollcallConfig {
    /// Preset substituted for missing or unknown tenant theme ids
    pub default_preset_id: String,

    /// Maximum number of rows in the history view
    pub history_limit: usize,

    /// Number of days in the weekly trend
    pub trend_days: u32,
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            default_preset_id: DEFAULT_PRESET_ID.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

impl RollcallConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a different fallback preset.
    pub fn with_default_preset(preset_id: impl Into<String>) -> Self {
        Self {
            default_preset_id: preset_id.into(),
            ..Default::default()
        }
    }

    /// Create a configuration with a custom history limit.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history_limit: limit,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RollcallConfig::new();
        assert_eq!(config.default_preset_id, "corporate");
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.trend_days, 7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RollcallConfig =
            serde_json::from_str(r#"{"default_preset_id": "learning"}"#).unwrap();
        assert_eq!(config.default_preset_id, "learning");
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}

//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot name for identification.
    pub name: String,
    /// Invalid answers tolerated at one step before the restart escalation.
    pub retry_threshold: u32,
    /// Delay before a session's first progress reminder fires.
    pub reminder_first_fire: Duration,
    /// Interval between progress reminders.
    pub reminder_interval: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "calorie-compass".to_string(),
            retry_threshold: 3,
            reminder_first_fire: Duration::from_secs(604_800), // 7 days
            reminder_interval: Duration::from_secs(604_800),
        }
    }
}

impl BotConfig {
    /// Build a config from environment overrides, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("CALORIE_COMPASS_RETRY_THRESHOLD") {
            let threshold: u32 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CALORIE_COMPASS_RETRY_THRESHOLD".to_string(),
                message: format!("not a positive integer: {raw}"),
            })?;
            if threshold == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "CALORIE_COMPASS_RETRY_THRESHOLD".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
            config.retry_threshold = threshold;
        }

        if let Ok(raw) = std::env::var("CALORIE_COMPASS_REMINDER_INTERVAL_SECS") {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CALORIE_COMPASS_REMINDER_INTERVAL_SECS".to_string(),
                message: format!("not a number of seconds: {raw}"),
            })?;
            config.reminder_interval = Duration::from_secs(secs);
            config.reminder_first_fire = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

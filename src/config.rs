//!
//! Runtime configuration. Every field has a default that reproduces the
//! stock dashboard behavior, so an empty JSON object is a valid config.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::fixtures::users::{DEMO_PASSWORD, MAX_TRIAL_PERIOD_DAYS, TRIAL_PERIOD_DAYS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// Mocked authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthConfig {
    /// Password accepted for every directory account.
    pub demo_password: String,
    /// Simulated round-trip before a login attempt is answered.
    pub login_delay_ms: u64,
    /// Reject trial accounts whose expiry has passed.
    pub enforce_trial_expiry: bool,
    pub trial_period_days: i64,
}

impl AuthConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Rejects values the session could not honor.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if !(0..=MAX_TRIAL_PERIOD_DAYS).contains(&self.trial_period_days) {
            return Err(DashboardError::Config(format!(
                "trialPeriodDays must be between 0 and {MAX_TRIAL_PERIOD_DAYS}, got {}",
                self.trial_period_days
            )));
        }
        Ok(())
    }

    /// No delay; handy for tests and tooling.
    pub fn instant() -> Self {
        AuthConfig {
            login_delay_ms: 0,
            ..AuthConfig::default()
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            demo_password: DEMO_PASSWORD.to_string(),
            login_delay_ms: 1000,
            enforce_trial_expiry: false,
            trial_period_days: TRIAL_PERIOD_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback `tracing` filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string() }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DashboardError> {
        let config: Self = serde_json::from_str(json).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.auth.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DashboardError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, DashboardError> {
        serde_json::to_string_pretty(self).map_err(|e| DashboardError::Config(e.to_string()))
    }
}

//! Configuration for urgency, notice and contact rules.

use crate::constants::{
    CRITICAL_WINDOW_DAYS, NOTICE_PERIOD_DAYS, STALE_CONTACT_MONTHS, WARNING_WINDOW_DAYS,
};
use crate::{EngineError, EngineResult};
use dealbook_core::calendar::WeekStart;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Day boundaries of the urgency tiers.
///
/// `0..=critical_days` is critical, `critical_days+1..=warning_days` is a
/// warning, anything later is ok, anything negative is overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyThresholds {
    /// Last day (inclusive) of the critical tier.
    pub critical_days: i64,
    /// Last day (inclusive) of the warning tier.
    pub warning_days: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            critical_days: CRITICAL_WINDOW_DAYS,
            warning_days: WARNING_WINDOW_DAYS,
        }
    }
}

/// Engine configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// stale_contact_months = 3
///
/// [urgency]
/// critical_days = 14
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Notice periods ahead of a renewal, in days.
    pub notice_periods_days: Vec<i64>,

    /// Months without contact before a relationship counts as stale.
    pub stale_contact_months: u32,

    /// First column of calendar grids.
    pub week_start: WeekStart,

    /// Urgency tier boundaries. Kept last so it renders as a trailing TOML table.
    pub urgency: UrgencyThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            notice_periods_days: NOTICE_PERIOD_DAYS.to_vec(),
            stale_contact_months: STALE_CONTACT_MONTHS,
            week_start: WeekStart::default(),
            urgency: UrgencyThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the urgency thresholds.
    #[must_use]
    pub fn with_urgency(mut self, critical_days: i64, warning_days: i64) -> Self {
        self.urgency = UrgencyThresholds {
            critical_days,
            warning_days,
        };
        self
    }

    /// Sets the notice periods.
    #[must_use]
    pub fn with_notice_periods(mut self, days: Vec<i64>) -> Self {
        self.notice_periods_days = days;
        self
    }

    /// Sets the stale contact threshold.
    #[must_use]
    pub fn with_stale_contact_months(mut self, months: u32) -> Self {
        self.stale_contact_months = months;
        self
    }

    /// Sets the calendar week start.
    #[must_use]
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` on a parse or validation failure.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| EngineError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::invalid_config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::invalid_config(e.to_string()))
    }

    /// Checks threshold ordering.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if tiers overlap or a period is
    /// not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.urgency.critical_days < 0 {
            return Err(EngineError::invalid_config(
                "urgency.critical_days cannot be negative",
            ));
        }
        if self.urgency.warning_days <= self.urgency.critical_days {
            return Err(EngineError::invalid_config(
                "urgency.warning_days must exceed urgency.critical_days",
            ));
        }
        if self.notice_periods_days.iter().any(|d| *d <= 0) {
            return Err(EngineError::invalid_config(
                "notice_periods_days must be positive",
            ));
        }
        Ok(())
    }
}

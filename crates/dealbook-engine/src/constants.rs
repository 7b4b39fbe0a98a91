//! Business-rule thresholds.
//!
//! These are the defaults behind [`EngineConfig`](crate::types::EngineConfig);
//! a TOML configuration file can override each of them.

/// Months without contact after which a partner relationship is stale.
pub const STALE_CONTACT_MONTHS: u32 = 6;

/// Notice periods, in days, ahead of a renewal or termination date.
pub const NOTICE_PERIOD_DAYS: [i64; 3] = [90, 60, 30];

/// Upper bound (inclusive) of the critical urgency tier, in days.
pub const CRITICAL_WINDOW_DAYS: i64 = 30;

/// Upper bound (inclusive) of the warning urgency tier, in days.
pub const WARNING_WINDOW_DAYS: i64 = 60;

/// Filter value that matches everything.
pub const ALL_FILTER: &str = "All";

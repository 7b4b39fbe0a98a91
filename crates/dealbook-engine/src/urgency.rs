//! Deadline urgency, notice periods and contact staleness.

use crate::types::UrgencyThresholds;
use crate::EngineResult;
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal urgency tier. Orders from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// The target date has passed.
    Overdue,
    /// Due within the critical window.
    Critical,
    /// Due within the warning window.
    Warning,
    /// Nothing to do yet.
    Ok,
}

impl UrgencyTier {
    /// Classifies a day count against the thresholds.
    #[must_use]
    pub fn classify(days_until: i64, thresholds: &UrgencyThresholds) -> Self {
        if days_until < 0 {
            Self::Overdue
        } else if days_until <= thresholds.critical_days {
            Self::Critical
        } else if days_until <= thresholds.warning_days {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// Lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Ok => "ok",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance to a target date and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyWindow {
    /// The date being counted down to.
    pub target: Date,
    /// Whole calendar days from now to the target; negative when overdue.
    pub days_until: i64,
    /// Tier for `days_until`.
    pub tier: UrgencyTier,
}

/// Computes the urgency of `target` as seen from `now`.
///
/// Days are counted between calendar dates, so the time of day never causes
/// an off-by-one.
///
/// # Example
///
/// ```rust
/// use dealbook_core::types::Date;
/// use dealbook_engine::types::UrgencyThresholds;
/// use dealbook_engine::urgency::{compute_urgency, UrgencyTier};
///
/// let now = Date::from_ymd(2025, 1, 1).unwrap();
/// let window = compute_urgency(now.add_days(31), now, &UrgencyThresholds::default());
/// assert_eq!(window.days_until, 31);
/// assert_eq!(window.tier, UrgencyTier::Warning);
/// ```
#[must_use]
pub fn compute_urgency(target: Date, now: Date, thresholds: &UrgencyThresholds) -> UrgencyWindow {
    let days_until = now.days_between(&target);
    UrgencyWindow {
        target,
        days_until,
        tier: UrgencyTier::classify(days_until, thresholds),
    }
}

/// Like [`compute_urgency`] with default thresholds, taking ISO strings.
///
/// Each argument is `YYYY-MM-DD` or an RFC 3339 timestamp; only the calendar
/// date of a timestamp is used.
///
/// # Errors
///
/// Returns `EngineError::Core` if either string is not a date.
pub fn compute_urgency_iso(target: &str, now: &str) -> EngineResult<UrgencyWindow> {
    let target = Date::parse(target)?;
    let now = Date::parse(now)?;
    Ok(compute_urgency(target, now, &UrgencyThresholds::default()))
}

/// The tightest notice period that `days_until` falls within.
///
/// With periods `[90, 60, 30]`, 45 days out gives `Some(60)` and 100 days
/// out gives `None`. Overdue dates have no milestone.
#[must_use]
pub fn notice_milestone(days_until: i64, notice_periods: &[i64]) -> Option<i64> {
    if days_until < 0 {
        return None;
    }
    notice_periods
        .iter()
        .copied()
        .filter(|period| days_until <= *period)
        .min()
}

/// Whether a relationship has gone without contact for `months` months.
///
/// True when `last_contact` is strictly before `now` minus `months` calendar
/// months, or when no contact was ever recorded.
#[must_use]
pub fn is_stale_contact(last_contact: Option<Date>, now: Date, months: u32) -> bool {
    let Some(last) = last_contact else {
        return true;
    };
    let back = i32::try_from(months).map_or(i32::MIN, |m| -m);
    match now.add_months(back) {
        Ok(cutoff) => last < cutoff,
        // Cutoff before the supported calendar: nothing can be older.
        Err(_) => false,
    }
}

//! Alert acknowledgement and the pending-alert queue.
//!
//! Acknowledging returns a new collection; the caller's alerts are never
//! modified in place.

use crate::types::{Alert, EngineConfig};
use crate::urgency::{compute_urgency, UrgencyWindow};
use crate::{EngineError, EngineResult};
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Returns a copy of `alerts` with the alert `id` marked acknowledged.
///
/// Acknowledging an already acknowledged alert is a no-op.
///
/// # Errors
///
/// Returns `EngineError::RecordNotFound` if no alert has that id.
pub fn acknowledge(alerts: &[Alert], id: &str) -> EngineResult<Vec<Alert>> {
    if !alerts.iter().any(|a| a.id == id) {
        return Err(EngineError::not_found(id));
    }
    info!(alert = id, "acknowledged alert");
    Ok(alerts
        .iter()
        .map(|a| {
            if a.id == id {
                Alert {
                    acknowledged: true,
                    ..a.clone()
                }
            } else {
                a.clone()
            }
        })
        .collect())
}

/// Alerts not yet acknowledged, in input order.
#[must_use]
pub fn pending(alerts: &[Alert]) -> Vec<Alert> {
    alerts.iter().filter(|a| !a.acknowledged).cloned().collect()
}

/// A pending alert with its urgency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertQueueEntry {
    /// The alert.
    pub alert: Alert,
    /// Distance to its due date.
    pub urgency: UrgencyWindow,
}

/// Pending alerts ordered by tier, then by days until due.
#[must_use]
pub fn alert_queue(alerts: &[Alert], now: Date, config: &EngineConfig) -> Vec<AlertQueueEntry> {
    let mut queue: Vec<AlertQueueEntry> = alerts
        .iter()
        .filter(|a| !a.acknowledged)
        .map(|a| AlertQueueEntry {
            alert: a.clone(),
            urgency: compute_urgency(a.due_date, now, &config.urgency),
        })
        .collect();
    queue.sort_by_key(|e| (e.urgency.tier, e.urgency.days_until));
    queue
}

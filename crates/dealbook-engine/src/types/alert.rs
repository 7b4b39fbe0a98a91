//! Dashboard alerts.

use super::AlertKind;
use crate::error::{EngineError, EngineResult};
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};

/// A dated reminder attached to a company and partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier.
    pub id: String,
    /// Category.
    pub kind: AlertKind,
    /// Short description.
    pub title: String,
    /// Company concerned.
    pub company_name: String,
    /// Partner concerned.
    pub partner_name: String,
    /// Date the alert falls due.
    pub due_date: Date,
    /// Whether a user has dismissed the alert.
    #[serde(default)]
    pub acknowledged: bool,
}

impl Alert {
    /// Status label used by filters.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.acknowledged {
            "Acknowledged"
        } else {
            "Open"
        }
    }

    /// Checks the alert has an id and a title.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissingField` for a blank id and
    /// `EngineError::InvalidRecord` for a blank title.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::missing_field("id"));
        }
        if self.title.trim().is_empty() {
            return Err(EngineError::invalid_record(&self.id, "title is empty"));
        }
        Ok(())
    }
}

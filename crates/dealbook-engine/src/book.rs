//! The deal book: every collection the dashboard reads.

use crate::record::Record;
use crate::types::{Alert, DealKind, DealRecord, FundingRound, LegalDocument};
use crate::{alerts, EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Deals, financing rounds, legal documents and alerts loaded together.
///
/// # Example
///
/// ```rust
/// use dealbook_engine::book::DealBook;
///
/// let book = DealBook::from_json(r#"{ "deals": [], "alerts": [] }"#).unwrap();
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DealBook {
    /// Joint venture, studio and accelerator deals.
    pub deals: Vec<DealRecord>,
    /// Financing rounds.
    pub rounds: Vec<FundingRound>,
    /// Legal documents.
    pub documents: Vec<LegalDocument>,
    /// Alerts.
    pub alerts: Vec<Alert>,
}

impl DealBook {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> DealBookBuilder {
        DealBookBuilder::new()
    }

    /// Parses and validates a JSON feed.
    ///
    /// Missing collections default to empty.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFeed` if the JSON is malformed, or the
    /// record validation error if any record breaks an invariant or repeats
    /// an id.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let book: Self =
            serde_json::from_str(json).map_err(|e| EngineError::invalid_feed(e.to_string()))?;
        book.validate()?;
        info!(
            deals = book.deals.len(),
            rounds = book.rounds.len(),
            documents = book.documents.len(),
            alerts = book.alerts.len(),
            "loaded deal book"
        );
        Ok(book)
    }

    /// Renders the book as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFeed` if serialization fails.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::invalid_feed(e.to_string()))
    }

    /// Validates every record and checks ids are unique per collection.
    ///
    /// Also logs a warning for concluded deals that still have open alerts.
    ///
    /// # Errors
    ///
    /// Returns the first validation or duplicate-id error found.
    pub fn validate(&self) -> EngineResult<()> {
        for deal in &self.deals {
            deal.validate()?;
        }
        for round in &self.rounds {
            round.validate()?;
        }
        for document in &self.documents {
            document.validate()?;
        }
        for alert in &self.alerts {
            alert.validate()?;
        }

        check_unique("deal", &self.deals)?;
        check_unique("round", &self.rounds)?;
        check_unique("document", &self.documents)?;
        check_unique("alert", &self.alerts)?;

        for deal in self.deals.iter().filter(|d| d.is_concluded()) {
            let open = self
                .alerts
                .iter()
                .filter(|a| !a.acknowledged && a.company_name == deal.company_name)
                .count();
            if open > 0 {
                warn!(deal = %deal.id, open, "concluded deal still has open alerts");
            }
        }
        Ok(())
    }

    /// Returns true if every collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
            && self.rounds.is_empty()
            && self.documents.is_empty()
            && self.alerts.is_empty()
    }

    /// Deals of one programme, in feed order.
    #[must_use]
    pub fn deals_of_kind(&self, kind: DealKind) -> Vec<DealRecord> {
        self.deals.iter().filter(|d| d.kind == kind).cloned().collect()
    }

    /// Distinct partner names across deals and rounds, sorted.
    #[must_use]
    pub fn partners(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .deals
            .iter()
            .map(|d| d.partner_name.clone())
            .chain(self.rounds.iter().map(|r| r.lead_partner.clone()))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }

    /// Returns a new book with one alert acknowledged.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::RecordNotFound` if no alert has that id.
    pub fn acknowledge_alert(&self, id: &str) -> EngineResult<Self> {
        Ok(Self {
            alerts: alerts::acknowledge(&self.alerts, id)?,
            ..self.clone()
        })
    }
}

fn check_unique<R: Record>(collection: &str, records: &[R]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(EngineError::DuplicateId {
                collection: collection.to_string(),
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Builder for constructing a [`DealBook`].
#[derive(Debug, Clone, Default)]
pub struct DealBookBuilder {
    deals: Vec<DealRecord>,
    rounds: Vec<FundingRound>,
    documents: Vec<LegalDocument>,
    alerts: Vec<Alert>,
}

impl DealBookBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a deal.
    #[must_use]
    pub fn add_deal(mut self, deal: DealRecord) -> Self {
        self.deals.push(deal);
        self
    }

    /// Adds multiple deals.
    #[must_use]
    pub fn add_deals(mut self, deals: impl IntoIterator<Item = DealRecord>) -> Self {
        self.deals.extend(deals);
        self
    }

    /// Adds a financing round.
    #[must_use]
    pub fn add_round(mut self, round: FundingRound) -> Self {
        self.rounds.push(round);
        self
    }

    /// Adds a legal document.
    #[must_use]
    pub fn add_document(mut self, document: LegalDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// Adds an alert.
    #[must_use]
    pub fn add_alert(mut self, alert: Alert) -> Self {
        self.alerts.push(alert);
        self
    }

    /// Builds and validates the book.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is invalid or ids repeat.
    pub fn build(self) -> EngineResult<DealBook> {
        let book = DealBook {
            deals: self.deals,
            rounds: self.rounds,
            documents: self.documents,
            alerts: self.alerts,
        };
        book.validate()?;
        Ok(book)
    }
}

//! Partnership deal record.

use super::{DealKind, DealStatus, Stage};
use crate::{EngineError, EngineResult};
use dealbook_core::types::{Currency, Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A joint venture, studio or accelerator deal.
///
/// Monetary fields are optional because the feed does not carry them for
/// every deal; the metric functions treat a missing value as "no data" and
/// return zero rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    /// Unique identifier.
    pub id: String,

    /// Programme the deal belongs to.
    pub kind: DealKind,

    /// Portfolio company or venture name.
    pub company_name: String,

    /// Corporate partner name.
    pub partner_name: String,

    /// Industry sector.
    #[serde(default)]
    pub sector: Option<String>,

    /// Reporting currency of the monetary fields.
    #[serde(default)]
    pub currency: Currency,

    /// Date the deal started.
    #[serde(default)]
    pub start_date: Option<Date>,

    /// Date the deal closed or is expected to close.
    #[serde(default)]
    pub close_date: Option<Date>,

    /// Next contractual deadline (renewal, milestone, notice).
    #[serde(default)]
    pub due_date: Option<Date>,

    /// Capital invested.
    #[serde(default)]
    pub investment_amount: Option<Decimal>,

    /// Latest company valuation.
    #[serde(default, alias = "valuation")]
    pub current_valuation: Option<Decimal>,

    /// Percentage of the company held (0-100).
    #[serde(default)]
    pub equity_stake: Option<Decimal>,

    /// Health label.
    pub status: DealStatus,

    /// Lifecycle stage (studio and accelerator deals only).
    #[serde(default)]
    pub stage: Option<Stage>,

    /// Most recent contact with the partner.
    #[serde(default)]
    pub last_contact: Option<Date>,
}

impl DealRecord {
    /// Creates a new deal builder.
    #[must_use]
    pub fn builder() -> DealRecordBuilder {
        DealRecordBuilder::new()
    }

    /// True once the deal is completed, exited or graduated.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.status == DealStatus::Completed || self.stage.is_some_and(|s| s.is_concluded())
    }

    /// The date used for date-range filters and calendar placement.
    ///
    /// Prefers the next deadline, then the close date, then the start date.
    #[must_use]
    pub fn key_date(&self) -> Option<Date> {
        self.due_date.or(self.close_date).or(self.start_date)
    }

    /// Checks the value-range invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id, a negative amount, or an equity
    /// stake outside 0-100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::missing_field("id"));
        }
        if let Some(stake) = self.equity_stake {
            validate_equity(&self.id, stake)?;
        }
        if self.investment_amount.is_some_and(|a| a < Decimal::ZERO) {
            return Err(EngineError::invalid_record(
                &self.id,
                "investment_amount cannot be negative",
            ));
        }
        if self.current_valuation.is_some_and(|v| v < Decimal::ZERO) {
            return Err(EngineError::invalid_record(
                &self.id,
                "current_valuation cannot be negative",
            ));
        }
        if let Some(stage) = self.stage {
            if stage.kind() != self.kind {
                return Err(EngineError::invalid_record(
                    &self.id,
                    format!("stage '{stage}' does not belong to {} deals", self.kind),
                ));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_equity(id: &str, stake: Decimal) -> EngineResult<()> {
    if stake < Decimal::ZERO || stake > Decimal::ONE_HUNDRED {
        return Err(EngineError::EquityOutOfRange {
            id: id.to_string(),
            value: stake.to_string(),
        });
    }
    Ok(())
}

/// Builder for constructing a [`DealRecord`].
#[derive(Debug, Clone, Default)]
pub struct DealRecordBuilder {
    id: Option<String>,
    kind: Option<DealKind>,
    company_name: Option<String>,
    partner_name: Option<String>,
    sector: Option<String>,
    currency: Currency,
    start_date: Option<Date>,
    close_date: Option<Date>,
    due_date: Option<Date>,
    investment_amount: Option<Decimal>,
    current_valuation: Option<Decimal>,
    equity_stake: Option<Decimal>,
    status: Option<DealStatus>,
    stage: Option<Stage>,
    last_contact: Option<Date>,
}

impl DealRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deal ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the deal kind.
    #[must_use]
    pub fn kind(mut self, kind: DealKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Sets the partner name.
    #[must_use]
    pub fn partner_name(mut self, name: impl Into<String>) -> Self {
        self.partner_name = Some(name.into());
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the close date.
    #[must_use]
    pub fn close_date(mut self, date: Date) -> Self {
        self.close_date = Some(date);
        self
    }

    /// Sets the next deadline.
    #[must_use]
    pub fn due_date(mut self, date: Date) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Sets the amount invested.
    #[must_use]
    pub fn investment_amount(mut self, amount: Decimal) -> Self {
        self.investment_amount = Some(amount);
        self
    }

    /// Sets the current valuation.
    #[must_use]
    pub fn current_valuation(mut self, valuation: Decimal) -> Self {
        self.current_valuation = Some(valuation);
        self
    }

    /// Sets the equity stake (percent).
    #[must_use]
    pub fn equity_stake(mut self, stake: Decimal) -> Self {
        self.equity_stake = Some(stake);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: DealStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the stage.
    #[must_use]
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Sets the last contact date.
    #[must_use]
    pub fn last_contact(mut self, date: Date) -> Self {
        self.last_contact = Some(date);
        self
    }

    /// Builds the deal.
    ///
    /// Status defaults to `On Track` when not set.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or
    /// [`DealRecord::validate`] rejects the values.
    pub fn build(self) -> EngineResult<DealRecord> {
        let id = self.id.ok_or_else(|| EngineError::missing_field("id"))?;
        let kind = self.kind.ok_or_else(|| EngineError::missing_field("kind"))?;
        let company_name = self
            .company_name
            .ok_or_else(|| EngineError::missing_field("company_name"))?;
        let partner_name = self
            .partner_name
            .ok_or_else(|| EngineError::missing_field("partner_name"))?;

        let deal = DealRecord {
            id,
            kind,
            company_name,
            partner_name,
            sector: self.sector,
            currency: self.currency,
            start_date: self.start_date,
            close_date: self.close_date,
            due_date: self.due_date,
            investment_amount: self.investment_amount,
            current_valuation: self.current_valuation,
            equity_stake: self.equity_stake,
            status: self.status.unwrap_or(DealStatus::OnTrack),
            stage: self.stage,
            last_contact: self.last_contact,
        };

        deal.validate()?;
        Ok(deal)
    }
}

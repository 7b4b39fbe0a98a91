//! Accessor traits shared by every record collection.
//!
//! The filter, grouping and aggregation functions are generic over these
//! traits, so deals, rounds, documents and alerts all flow through the same
//! code instead of one hand-written variant per view.

use crate::types::{Alert, DealRecord, FundingRound, LegalDocument};
use dealbook_core::types::Date;
use rust_decimal::Decimal;

/// Fields used by filtering, grouping and calendar placement.
pub trait Record {
    /// Unique identifier.
    fn id(&self) -> &str;

    /// Partner name used for partner filters and grouping.
    fn partner(&self) -> &str;

    /// Company name used for company grouping.
    fn company(&self) -> &str;

    /// Label matched by the status criterion.
    fn status_label(&self) -> Option<&str>;

    /// Label matched by the kind/type criterion.
    fn kind_label(&self) -> Option<&str>;

    /// Text fields searched by the free-text criterion.
    fn search_fields(&self) -> Vec<&str>;

    /// Date tested by date-range filters.
    fn key_date(&self) -> Option<Date>;

    /// Whether the record is completed, exited or graduated.
    fn is_concluded(&self) -> bool;
}

/// Monetary fields read by the metric deriver.
pub trait Valued {
    /// Capital invested.
    fn investment_amount(&self) -> Option<Decimal>;

    /// Valuation of the whole company.
    fn valuation(&self) -> Option<Decimal>;

    /// Percentage held (0-100).
    fn equity_stake(&self) -> Option<Decimal>;
}

impl Record for DealRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn partner(&self) -> &str {
        &self.partner_name
    }

    fn company(&self) -> &str {
        &self.company_name
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.company_name.as_str(), self.partner_name.as_str()];
        if let Some(sector) = &self.sector {
            fields.push(sector.as_str());
        }
        if let Some(stage) = self.stage {
            fields.push(stage.as_str());
        }
        fields
    }

    fn key_date(&self) -> Option<Date> {
        DealRecord::key_date(self)
    }

    fn is_concluded(&self) -> bool {
        DealRecord::is_concluded(self)
    }
}

impl Valued for DealRecord {
    fn investment_amount(&self) -> Option<Decimal> {
        self.investment_amount
    }

    fn valuation(&self) -> Option<Decimal> {
        self.current_valuation
    }

    fn equity_stake(&self) -> Option<Decimal> {
        self.equity_stake
    }
}

impl Record for FundingRound {
    fn id(&self) -> &str {
        &self.id
    }

    fn partner(&self) -> &str {
        &self.lead_partner
    }

    fn company(&self) -> &str {
        &self.company_name
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.round_type.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.lead_partner.as_str(),
            self.round_type.as_str(),
        ]
    }

    fn key_date(&self) -> Option<Date> {
        self.close_date
    }

    fn is_concluded(&self) -> bool {
        self.status == crate::types::DealStatus::Completed
    }
}

impl Valued for FundingRound {
    fn investment_amount(&self) -> Option<Decimal> {
        self.our_investment
    }

    fn valuation(&self) -> Option<Decimal> {
        Some(self.post_money_valuation())
    }

    fn equity_stake(&self) -> Option<Decimal> {
        Some(self.effective_stake())
    }
}

impl Record for LegalDocument {
    fn id(&self) -> &str {
        &self.id
    }

    fn partner(&self) -> &str {
        &self.partner_name
    }

    fn company(&self) -> &str {
        &self.company_name
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.doc_type.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.filename.as_str(),
            self.company_name.as_str(),
            self.partner_name.as_str(),
        ]
    }

    fn key_date(&self) -> Option<Date> {
        Some(self.uploaded_on)
    }

    fn is_concluded(&self) -> bool {
        self.status == crate::types::DocumentStatus::Superseded
    }
}

impl Record for Alert {
    fn id(&self) -> &str {
        &self.id
    }

    fn partner(&self) -> &str {
        &self.partner_name
    }

    fn company(&self) -> &str {
        &self.company_name
    }

    fn status_label(&self) -> Option<&str> {
        Some(Alert::status_label(self))
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.company_name.as_str(),
            self.partner_name.as_str(),
        ]
    }

    fn key_date(&self) -> Option<Date> {
        Some(self.due_date)
    }

    fn is_concluded(&self) -> bool {
        self.acknowledged
    }
}

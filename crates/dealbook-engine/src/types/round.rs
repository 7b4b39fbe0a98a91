//! Financing round record.

use super::deal::validate_equity;
use super::{DealStatus, RoundType};
use crate::{EngineError, EngineResult};
use dealbook_core::types::{Currency, Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced financing round in a portfolio company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    /// Unique identifier.
    pub id: String,

    /// Company raising the round.
    pub company_name: String,

    /// Partner that led or co-led the round.
    pub lead_partner: String,

    /// Round label.
    pub round_type: RoundType,

    /// Reporting currency.
    #[serde(default)]
    pub currency: Currency,

    /// New money raised in the round.
    pub amount_raised: Decimal,

    /// Valuation before the new money.
    pub pre_money_valuation: Decimal,

    /// Our cheque in this round.
    #[serde(default)]
    pub our_investment: Option<Decimal>,

    /// Our fully diluted stake after the round (percent). Falls back to
    /// [`FundingRound::implied_stake`] when absent.
    #[serde(default)]
    pub equity_stake: Option<Decimal>,

    /// Closing date.
    #[serde(default)]
    pub close_date: Option<Date>,

    /// Health label.
    pub status: DealStatus,
}

impl FundingRound {
    /// Valuation after the new money: pre-money plus amount raised.
    #[must_use]
    pub fn post_money_valuation(&self) -> Decimal {
        self.pre_money_valuation
            .checked_add(self.amount_raised)
            .unwrap_or(self.pre_money_valuation)
    }

    /// Stake bought by our cheque alone, as a percentage of post-money.
    ///
    /// Zero when we did not invest or post-money is zero.
    #[must_use]
    pub fn implied_stake(&self) -> Decimal {
        let post = self.post_money_valuation();
        match self.our_investment {
            Some(ours) if post > Decimal::ZERO => ours
                .checked_div(post)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// The explicit stake if recorded, else the implied one.
    #[must_use]
    pub fn effective_stake(&self) -> Decimal {
        self.equity_stake.unwrap_or_else(|| self.implied_stake())
    }

    /// Checks the value-range invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id, negative amounts, or an equity stake
    /// outside 0-100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::missing_field("id"));
        }
        if self.amount_raised < Decimal::ZERO || self.pre_money_valuation < Decimal::ZERO {
            return Err(EngineError::invalid_record(
                &self.id,
                "round amounts cannot be negative",
            ));
        }
        if self.our_investment.is_some_and(|a| a < Decimal::ZERO) {
            return Err(EngineError::invalid_record(
                &self.id,
                "our_investment cannot be negative",
            ));
        }
        if self.our_investment.unwrap_or(Decimal::ZERO) > self.amount_raised {
            return Err(EngineError::invalid_record(
                &self.id,
                "our_investment exceeds amount raised",
            ));
        }
        if let Some(stake) = self.equity_stake {
            validate_equity(&self.id, stake)?;
        }
        Ok(())
    }
}

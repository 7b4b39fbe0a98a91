//! Per-record derived metrics.
//!
//! Money stays in `Decimal`; multiples and percentages are `f64` for display
//! and averaging. Every function here is total: missing fields or a zero
//! investment give `0`, never NaN, infinity or a panic.

use crate::record::Valued;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current value of our stake: `valuation * equity_stake / 100`.
///
/// Zero if either operand is missing.
#[must_use]
pub fn position_value<V: Valued + ?Sized>(record: &V) -> Decimal {
    match (record.valuation(), record.equity_stake()) {
        (Some(valuation), Some(stake)) => valuation
            .checked_mul(stake)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Multiple on invested capital: position value over investment.
///
/// Zero when the investment is missing or not positive, or when the record
/// has no valuation. Never negative.
#[must_use]
pub fn moic<V: Valued + ?Sized>(record: &V) -> f64 {
    let Some(investment) = record.investment_amount() else {
        return 0.0;
    };
    if investment <= Decimal::ZERO || record.valuation().is_none() {
        return 0.0;
    }

    position_value(record)
        .checked_div(investment)
        .and_then(|m| m.to_f64())
        .filter(|m| m.is_finite())
        .map_or(0.0, |m| m.max(0.0))
}

/// Return on investment in percent: `(moic - 1) * 100`.
///
/// A record with no usable MOIC reports -100.
#[must_use]
pub fn roi<V: Valued + ?Sized>(record: &V) -> f64 {
    (moic(record) - 1.0) * 100.0
}

/// Derived fields for one record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Capital invested (zero if unknown).
    pub investment: Decimal,
    /// Current value of our stake.
    pub position_value: Decimal,
    /// Multiple on invested capital.
    pub moic: f64,
    /// Return on investment, in percent.
    pub roi_pct: f64,
}

/// Computes every derived metric for a record.
#[must_use]
pub fn derive_metrics<V: Valued + ?Sized>(record: &V) -> DerivedMetrics {
    let moic = moic(record);
    DerivedMetrics {
        investment: record
            .investment_amount()
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO),
        position_value: position_value(record),
        moic,
        roi_pct: (moic - 1.0) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    struct Stub {
        investment: Option<Decimal>,
        valuation: Option<Decimal>,
        stake: Option<Decimal>,
    }

    impl Valued for Stub {
        fn investment_amount(&self) -> Option<Decimal> {
            self.investment
        }
        fn valuation(&self) -> Option<Decimal> {
            self.valuation
        }
        fn equity_stake(&self) -> Option<Decimal> {
            self.stake
        }
    }

    fn stub(
        investment: Option<Decimal>,
        valuation: Option<Decimal>,
        stake: Option<Decimal>,
    ) -> Stub {
        Stub {
            investment,
            valuation,
            stake,
        }
    }

    #[test]
    fn test_aviva_moic_and_roi() {
        let aviva = stub(Some(dec!(15_000_000)), Some(dec!(75_000_000)), Some(dec!(60)));
        assert_eq!(position_value(&aviva), dec!(45_000_000));
        assert_relative_eq!(moic(&aviva), 3.0);
        assert_relative_eq!(roi(&aviva), 200.0);
    }

    #[test]
    fn test_mediobanca_moic() {
        let mediobanca = stub(Some(dec!(10_000_000)), Some(dec!(50_909_090)), Some(dec!(55)));
        assert_eq!(position_value(&mediobanca), dec!(27_999_999.5));
        assert_relative_eq!(moic(&mediobanca), 2.79999995, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_guards() {
        let zero_investment = stub(Some(Decimal::ZERO), Some(dec!(100)), Some(dec!(50)));
        assert_eq!(moic(&zero_investment), 0.0);

        let no_investment = stub(None, Some(dec!(100)), Some(dec!(50)));
        assert_eq!(moic(&no_investment), 0.0);

        let no_valuation = stub(Some(dec!(100)), None, Some(dec!(50)));
        assert_eq!(moic(&no_valuation), 0.0);
        assert_eq!(position_value(&no_valuation), Decimal::ZERO);

        let no_stake = stub(Some(dec!(100)), Some(dec!(100)), None);
        assert_eq!(position_value(&no_stake), Decimal::ZERO);
        assert_eq!(moic(&no_stake), 0.0);
        assert_relative_eq!(roi(&no_stake), -100.0);
    }

    #[test]
    fn test_moic_never_negative() {
        let negative = stub(Some(dec!(-100)), Some(dec!(100)), Some(dec!(50)));
        assert_eq!(moic(&negative), 0.0);

        let wound_down = stub(Some(dec!(100)), Some(dec!(-500)), Some(dec!(50)));
        assert_eq!(moic(&wound_down), 0.0);
    }

    #[test]
    fn test_overflow_is_zero() {
        let huge = stub(Some(dec!(1)), Some(Decimal::MAX), Some(dec!(100)));
        assert_eq!(position_value(&huge), Decimal::ZERO);
        assert!(moic(&huge).is_finite());
    }

    #[test]
    fn test_derive_metrics() {
        let aviva = stub(Some(dec!(15_000_000)), Some(dec!(75_000_000)), Some(dec!(60)));
        let m = derive_metrics(&aviva);
        assert_eq!(m.investment, dec!(15_000_000));
        assert_eq!(m.position_value, dec!(45_000_000));
        assert_relative_eq!(m.moic, 3.0);
        assert_relative_eq!(m.roi_pct, 200.0);

        assert_eq!(
            derive_metrics(&stub(None, None, None)),
            DerivedMetrics {
                investment: Decimal::ZERO,
                position_value: Decimal::ZERO,
                moic: 0.0,
                roi_pct: -100.0,
            }
        );
    }
}

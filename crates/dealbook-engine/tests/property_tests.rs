//! Property-based tests for engine invariants.
//!
//! These tests verify properties that should hold for any feed:
//! - Filtering returns a subset whose members all match
//! - Filtering is idempotent
//! - Grouping is a total partition
//! - MOIC is never negative, NaN or infinite
//! - Reductions over an empty slice are zero

use dealbook_engine::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const PARTNERS: [&str; 4] = ["Aviva", "Mediobanca", "Banco Sabadell", "aviva"];
const SECTORS: [&str; 4] = ["Insurtech", "Wealth", "Payments", "Climate"];

/// Generates N deals with varying characteristics.
fn generate_deals(n: usize, seed: u64) -> Vec<DealRecord> {
    let base = Date::from_ymd(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let hash = simple_hash(seed, i as u64);
            let kind = DealKind::ALL[hash as usize % DealKind::ALL.len()];
            let status = DealStatus::ALL[(hash >> 8) as usize % DealStatus::ALL.len()];

            let mut builder = DealRecord::builder()
                .id(format!("D{i}"))
                .kind(kind)
                .company_name(format!("Company {}", hash % 7))
                .partner_name(PARTNERS[(hash >> 16) as usize % PARTNERS.len()])
                .sector(SECTORS[(hash >> 24) as usize % SECTORS.len()])
                .status(status);

            let stages = Stage::vocabulary(kind);
            if !stages.is_empty() {
                builder = builder.stage(stages[(hash >> 32) as usize % stages.len()]);
            }
            // Leave some monetary fields and dates out on purpose
            if hash % 5 != 0 {
                builder = builder.investment_amount(Decimal::from(hash % 2_000_000));
            }
            if hash % 7 != 0 {
                builder = builder.current_valuation(Decimal::from(hash % 90_000_000));
            }
            if hash % 3 != 0 {
                builder = builder.equity_stake(Decimal::from(hash % 101));
            }
            if hash % 4 != 0 {
                builder = builder.due_date(base.add_days((hash % 730) as i64));
            }
            builder.build().unwrap()
        })
        .collect()
}

fn generate_criteria(seed: u64) -> FilterCriteria {
    let hash = simple_hash(seed, 4242);
    let mut criteria = FilterCriteria::new();
    if hash % 2 == 0 {
        criteria = criteria.with_partner(PARTNERS[(hash >> 4) as usize % PARTNERS.len()]);
    }
    if hash % 3 == 0 {
        criteria = criteria.with_status(DealStatus::ALL[(hash >> 8) as usize % 4].as_str());
    }
    if hash % 5 == 0 {
        criteria = criteria.with_search("company 3");
    }
    if hash % 7 == 0 {
        let start = Date::from_ymd(2024, 6, 1).unwrap();
        criteria = criteria.with_date_range(start, start.add_days(180));
    }
    if hash % 11 == 0 {
        criteria = criteria.with_concluded(hash % 2 == 0);
    }
    criteria
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// PROPERTY: FILTER IS A MATCHING SUBSET
// =============================================================================

#[test]
fn property_filter_is_subset() {
    for seed in 0..50 {
        for size in [0, 1, 10, 50] {
            let deals = generate_deals(size, seed);
            let criteria = generate_criteria(seed);
            let result = filter(&deals, &criteria);

            assert!(result.len() <= deals.len());
            for r in &result {
                assert!(deals.contains(r), "record {} not in input", r.id);
                assert!(criteria.matches(r), "record {} fails criteria", r.id);
            }
            // Order is preserved
            let positions: Vec<usize> = result
                .iter()
                .map(|r| deals.iter().position(|d| d.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn property_filter_idempotent() {
    for seed in 0..50 {
        let deals = generate_deals(40, seed);
        let criteria = generate_criteria(seed);
        let once = filter(&deals, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice, "seed={seed}");
    }
}

#[test]
fn property_empty_criteria_identity() {
    for seed in 0..10 {
        let deals = generate_deals(25, seed);
        assert_eq!(filter(&deals, &FilterCriteria::new()), deals);
    }
}

// =============================================================================
// PROPERTY: GROUPING IS A PARTITION
// =============================================================================

#[test]
fn property_grouping_partitions_input() {
    for seed in 0..20 {
        for size in [0, 1, 10, 60] {
            let deals = generate_deals(size, seed);
            let grouping = group_by_partner(&deals);

            assert_eq!(grouping.record_count(), deals.len());

            let mut ids: Vec<String> = grouping
                .iter()
                .flat_map(|(key, records)| {
                    assert!(records.iter().all(|r| r.partner_name == key));
                    records.iter().map(|r| r.id.clone())
                })
                .collect();
            ids.sort();
            let mut expected: Vec<String> = deals.iter().map(|d| d.id.clone()).collect();
            expected.sort();
            assert_eq!(ids, expected, "seed={seed}, size={size}");

            let keys: Vec<&str> = grouping.keys().collect();
            assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn property_group_shares_sum_to_100() {
    for seed in 0..20 {
        let deals = generate_deals(30, seed);
        let metrics = summarize_groups(&group_by_company(&deals));
        let total_investment: Decimal = deals
            .iter()
            .filter_map(|d| d.investment_amount)
            .sum();
        let total_share: f64 = metrics.values().map(|m| m.investment_share_pct).sum();

        if total_investment.is_zero() {
            assert_eq!(total_share, 0.0);
        } else {
            assert!(
                (total_share - 100.0).abs() < 1e-6,
                "shares sum to {total_share} for seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: METRICS AND REDUCTIONS
// =============================================================================

#[test]
fn property_moic_non_negative_and_finite() {
    for seed in 0..20 {
        for deal in generate_deals(50, seed) {
            let m = moic(&deal);
            assert!(m.is_finite() && m >= 0.0, "moic {m} for {}", deal.id);
            assert!(roi(&deal) >= -100.0);
            if deal.investment_amount.map_or(true, |i| i.is_zero()) {
                assert_eq!(m, 0.0);
            }
        }
    }
}

#[test]
fn property_empty_reductions_are_zero() {
    let empty: Vec<DealRecord> = Vec::new();
    assert_eq!(count(&empty), 0);
    assert_eq!(sum_by(&empty, |d| d.investment_amount.unwrap_or_default()), Decimal::ZERO);
    assert_eq!(average_by(&empty, moic::<DealRecord>), 0.0);
    assert_eq!(summarize(&empty), AggregateSummary::default());
}

#[test]
fn property_group_totals_add_up() {
    for seed in 0..20 {
        let deals = generate_deals(40, seed);
        let overall = summarize(&deals);
        let metrics = summarize_groups(&group_by_partner(&deals));

        let count: usize = metrics.values().map(|m| m.summary.count).sum();
        let investment: Decimal = metrics.values().map(|m| m.summary.total_investment).sum();
        let value: Decimal = metrics.values().map(|m| m.summary.total_position_value).sum();

        assert_eq!(count, overall.count);
        assert_eq!(investment, overall.total_investment);
        assert_eq!(value, overall.total_position_value);
    }
}

// =============================================================================
// PROPTEST STRATEGIES
// =============================================================================

fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((0i64..1_000_000_000).prop_map(Decimal::from))
}

fn arb_stake() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((0u32..=10_000).prop_map(|bp| Decimal::new(i64::from(bp), 2)))
}

proptest! {
    #[test]
    fn prop_moic_guarded(
        investment in arb_amount(),
        valuation in arb_amount(),
        stake in arb_stake(),
    ) {
        let mut builder = DealRecord::builder()
            .id("P")
            .kind(DealKind::JointVenture)
            .company_name("Prop Co")
            .partner_name("Aviva");
        if let Some(i) = investment {
            builder = builder.investment_amount(i);
        }
        if let Some(v) = valuation {
            builder = builder.current_valuation(v);
        }
        if let Some(s) = stake {
            builder = builder.equity_stake(s);
        }
        let deal = builder.build().unwrap();

        let m = moic(&deal);
        prop_assert!(m.is_finite());
        prop_assert!(m >= 0.0);
        prop_assert!(position_value(&deal) >= Decimal::ZERO);
        if investment.map_or(true, |i| i.is_zero()) || valuation.is_none() {
            prop_assert_eq!(m, 0.0);
        }
    }

    #[test]
    fn prop_urgency_tier_matches_days(offset in -400i64..400) {
        let now = Date::from_ymd(2025, 6, 15).unwrap();
        let window = compute_urgency(now.add_days(offset), now, &UrgencyThresholds::default());
        prop_assert_eq!(window.days_until, offset);
        let expected = match offset {
            d if d < 0 => UrgencyTier::Overdue,
            0..=30 => UrgencyTier::Critical,
            31..=60 => UrgencyTier::Warning,
            _ => UrgencyTier::Ok,
        };
        prop_assert_eq!(window.tier, expected);
    }

    #[test]
    fn prop_filter_by_partner_matches_exactly(seed in 0u64..1_000, partner_idx in 0usize..4) {
        let deals = generate_deals(30, seed);
        let partner = PARTNERS[partner_idx];
        let result = filter(&deals, &FilterCriteria::new().with_partner(partner));
        let expected = deals.iter().filter(|d| d.partner_name == partner).count();
        prop_assert_eq!(result.len(), expected);
    }
}

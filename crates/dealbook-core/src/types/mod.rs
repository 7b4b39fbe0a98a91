//! Domain value types.
//!
//! - [`Date`]: Calendar date with whole-day arithmetic
//! - [`Currency`]: ISO currency codes

mod currency;
mod date;

pub use currency::Currency;
pub use date::Date;
pub(crate) use date::days_in_month;

//! # Dealbook Core
//!
//! Foundational value types shared by the Dealbook crates.
//!
//! - **Types**: [`Date`](types::Date) for whole-day date arithmetic and
//!   [`Currency`](types::Currency) codes
//! - **Calendar**: [`CalendarMonth`](calendar::CalendarMonth) navigation and
//!   month grids for calendar views
//!
//! ## Example
//!
//! ```rust
//! use dealbook_core::prelude::*;
//!
//! let month: CalendarMonth = "2024-12".parse().unwrap();
//! assert_eq!(month.next().to_string(), "2025-01");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod calendar;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::{CalendarMonth, WeekStart};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date};
}

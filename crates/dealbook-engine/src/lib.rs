//! # Dealbook Engine
//!
//! Filtering, grouping and aggregation for partnership deal records.
//!
//! The engine turns a flat feed of joint venture, studio, accelerator,
//! financing round, legal document and alert records into dashboard views.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every operation borrows its inputs and returns new values
//! - **One generic pipeline**: filter → group → derive metrics → aggregate, driven
//!   by the [`Record`] and [`Valued`] accessor traits instead of one copy per view
//! - **Total arithmetic**: Missing fields and zero investments give `0`, never a panic
//! - **Config-driven thresholds**: Urgency tiers, notice periods and stale-contact
//!   months come from [`EngineConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dealbook_engine::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let deals = vec![
//!     DealRecord::builder()
//!         .id("JV-001")
//!         .kind(DealKind::JointVenture)
//!         .company_name("Aviva Ventures Ltd")
//!         .partner_name("Aviva")
//!         .investment_amount(dec!(15_000_000))
//!         .current_valuation(dec!(75_000_000))
//!         .equity_stake(dec!(60))
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let aviva = filter(&deals, &FilterCriteria::new().with_partner("Aviva"));
//! assert_eq!(aviva.len(), 1);
//! assert_eq!(moic(&aviva[0]), 3.0);
//! assert_eq!(roi(&aviva[0]), 200.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`filter`] - Criteria and the generic filter
//! - [`grouping`] - Partition by partner, company or any key; calendar placement
//! - [`metrics`] - Position value, MOIC, ROI
//! - [`urgency`] - Days-until tiers, notice milestones, stale contacts
//! - [`aggregate`] - Count, sum, average and [`AggregateSummary`]
//! - [`view`] - The whole pipeline in one call
//! - [`schedule`] - Renewal schedule and stale-contact follow-ups
//! - [`alerts`] - Acknowledgement and the pending-alert queue
//! - [`audit`] - Document audit trail
//! - [`book`] - [`DealBook`] loading and validation
//! - [`types`] - Records, vocabularies and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod aggregate;
pub mod alerts;
pub mod audit;
pub mod book;
pub mod constants;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod metrics;
pub mod record;
pub mod schedule;
pub mod types;
pub mod urgency;
pub mod view;

// Re-export error types at crate root
pub use error::{EngineError, EngineResult};

pub use aggregate::AggregateSummary;
pub use book::{DealBook, DealBookBuilder};
pub use record::{Record, Valued};
pub use types::{
    Alert, AlertKind, AuditAction, AuditEntry, DealKind, DealRecord, DealRecordBuilder,
    DealStatus, DocumentStatus, DocumentType, EngineConfig, FundingRound, LegalDocument,
    RoundType, Stage, UrgencyThresholds,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{average_by, count, sum_by, summarize, AggregateSummary};
    pub use crate::alerts::{acknowledge, alert_queue, pending, AlertQueueEntry};
    pub use crate::audit::{audit_trail, latest_activity, AuditRow};
    pub use crate::book::{DealBook, DealBookBuilder};
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::filter::{filter, filter_by, DateRange, FilterCriteria};
    pub use crate::grouping::{
        events_in_month, group_by, group_by_company, group_by_partner, summarize_groups,
        GroupMetrics, Grouping,
    };
    pub use crate::metrics::{derive_metrics, moic, position_value, roi, DerivedMetrics};
    pub use crate::record::{Record, Valued};
    pub use crate::schedule::{renewal_schedule, stale_contacts, RenewalEntry};
    pub use crate::types::*;
    pub use crate::urgency::{
        compute_urgency, compute_urgency_iso, is_stale_contact, notice_milestone, UrgencyTier,
        UrgencyWindow,
    };
    pub use crate::view::{build_view, DealView, ViewRow};

    pub use dealbook_core::prelude::*;
}

//! Domain types for the deal engine.
//!
//! - [`DealRecord`]: A joint venture, studio or accelerator deal
//! - [`FundingRound`]: A financing round in a portfolio company
//! - [`LegalDocument`]: A legal document and its [`AuditEntry`] trail
//! - [`Alert`]: A dated reminder that users can acknowledge
//! - [`EngineConfig`]: Urgency, notice and contact thresholds
//! - Vocabularies: [`DealKind`], [`DealStatus`], [`Stage`], [`RoundType`],
//!   [`DocumentType`], [`DocumentStatus`], [`AuditAction`], [`AlertKind`]

mod alert;
mod config;
mod deal;
mod document;
mod round;
mod vocabulary;

pub use alert::Alert;
pub use config::{EngineConfig, UrgencyThresholds};
pub use deal::{DealRecord, DealRecordBuilder};
pub use document::{AuditEntry, LegalDocument};
pub use round::FundingRound;
pub use vocabulary::{
    AlertKind, AuditAction, DealKind, DealStatus, DocumentStatus, DocumentType, RoundType, Stage,
};

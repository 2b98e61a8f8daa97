//! # periop-core
//!
//! Shared vocabulary for the pre-operative risk workspace.
//!
//! - **Patient input**: [`PatientRecord`] with demographics, vitals, labs,
//!   comorbidities, and the planned surgery
//! - **Assessment output**: [`RiskAssessment`] with clamped category scores,
//!   a derived [`RiskTier`], and ordered [`RiskFactor`] explanations
//! - **Slot catalog**: [`TimeSlot`] reference data
//! - **Errors**: [`ValidationError`] raised before any scoring happens
//! - **Logging**: [`logging::init_subscriber`] for the `tracing` stack

#![deny(unsafe_code)]

pub mod assessment;
pub mod errors;
pub mod logging;
pub mod patient;
pub mod slot;

pub use assessment::{CategoryScores, RiskAssessment, RiskCategory, RiskFactor, RiskTier};
pub use errors::{Result, ValidationError};
pub use patient::{
    Comorbidity, Demographics, Gender, Labs, PatientRecord, SurgeryComplexity, SurgeryType,
    Vitals,
};
pub use slot::{TimeSlot, reference_catalog};

//! Slot recommender.
//!
//! Annotates every catalog slot; it never drops or reorders slots, so the
//! caller decides whether to hide the ones not recommended.

use periop_core::{RiskAssessment, RiskTier, TimeSlot};
use serde::{Deserialize, Serialize};

/// Reason attached to every slot for a High tier patient.
pub const HIGH_RISK_REASON: &str = "Early morning slot recommended for high-risk patients";

/// Reason attached to every slot for Low and Moderate tier patients.
pub const STANDARD_REASON: &str = "Standard scheduling available";

/// A catalog slot with its recommendation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSlot {
    /// The untouched catalog entry.
    #[serde(flatten)]
    pub slot: TimeSlot,
    /// Whether this slot suits the patient.
    pub recommended: bool,
    /// Why.
    pub reason: String,
}

/// Annotate the catalog for one assessment.
///
/// High tier: only the first (earliest-listed) slot is recommended. Any other
/// tier: every slot is recommended.
pub fn recommend_slots(assessment: &RiskAssessment, catalog: &[TimeSlot]) -> Vec<AnnotatedSlot> {
    let high_risk = assessment.overall_risk() == RiskTier::High;
    let reason = if high_risk {
        HIGH_RISK_REASON
    } else {
        STANDARD_REASON
    };

    catalog
        .iter()
        .enumerate()
        .map(|(index, slot)| AnnotatedSlot {
            slot: slot.clone(),
            recommended: !high_risk || index == 0,
            reason: reason.to_string(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Resource advisor.
//!
//! Each [`ResourceRule`] names one preparation step and the threshold that
//! requires it. Rules are independent and contribute at most one entry each,
//! in table order. An empty result means a standard setup.

use periop_core::{PatientRecord, RiskAssessment, RiskCategory};
use serde::Serialize;

/// What makes a resource necessary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ResourceTrigger {
    /// A clamped category score strictly above `above`.
    Score {
        /// Category to read from the assessment.
        category: RiskCategory,
        /// Exclusive threshold.
        above: f64,
    },
    /// The record's BMI strictly above `above`.
    BmiAbove {
        /// Exclusive threshold.
        above: f64,
    },
}

/// One entry of the resource table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRule {
    /// Resource requirement reported when triggered.
    pub resource: &'static str,
    /// When it is required.
    pub trigger: ResourceTrigger,
}

impl ResourceRule {
    /// Whether the resource is required for this patient.
    pub fn applies(&self, assessment: &RiskAssessment, record: &PatientRecord) -> bool {
        match self.trigger {
            ResourceTrigger::Score { category, above } => assessment.score(category) > above,
            ResourceTrigger::BmiAbove { above } => record.demographics.bmi > above,
        }
    }
}

/// The reference resource table, in reporting order.
pub const DEFAULT_RESOURCE_RULES: &[ResourceRule] = &[
    ResourceRule {
        resource: "ICU bed reserved",
        trigger: ResourceTrigger::Score {
            category: RiskCategory::Mortality,
            above: 5.0,
        },
    },
    ResourceRule {
        resource: "Blood bank notification",
        trigger: ResourceTrigger::Score {
            category: RiskCategory::Bleeding,
            above: 8.0,
        },
    },
    ResourceRule {
        resource: "Enhanced sterile setup",
        trigger: ResourceTrigger::Score {
            category: RiskCategory::Infection,
            above: 10.0,
        },
    },
    ResourceRule {
        resource: "Bariatric equipment",
        trigger: ResourceTrigger::BmiAbove { above: 35.0 },
    },
];

/// Required resources under the reference table.
pub fn derive_required_resources(
    assessment: &RiskAssessment,
    record: &PatientRecord,
) -> Vec<String> {
    derive_required_resources_with(DEFAULT_RESOURCE_RULES, assessment, record)
}

/// Required resources under an arbitrary table.
pub fn derive_required_resources_with(
    rules: &[ResourceRule],
    assessment: &RiskAssessment,
    record: &PatientRecord,
) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.applies(assessment, record))
        .map(|rule| rule.resource.to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

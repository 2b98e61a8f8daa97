//! Combined scheduling view for one assessed patient.

use periop_core::{PatientRecord, RiskAssessment, RiskTier, TimeSlot};
use serde::Serialize;
use tracing::debug;

use crate::duration::{estimate_duration, high_risk_protocol};
use crate::resources::derive_required_resources;
use crate::slots::{AnnotatedSlot, recommend_slots};

/// Everything the scheduling surface needs, derived in one pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPlan {
    /// Tier the plan was derived for.
    pub overall_risk: RiskTier,
    /// Every catalog slot, annotated.
    pub slots: Vec<AnnotatedSlot>,
    /// Preparation steps; empty means standard setup.
    pub required_resources: Vec<String>,
    /// Display form of the duration estimate.
    pub estimated_duration: String,
    /// Staffing advisory for High tier patients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<&'static str>,
}

impl SchedulingPlan {
    /// Slots marked recommended, in catalog order.
    pub fn recommended_slots(&self) -> impl Iterator<Item = &AnnotatedSlot> {
        self.slots.iter().filter(|s| s.recommended)
    }

    /// Whether no extra resources are needed.
    pub fn is_standard_setup(&self) -> bool {
        self.required_resources.is_empty()
    }
}

/// Derive slots, resources, duration, and advisory for one patient.
pub fn plan_schedule(
    assessment: &RiskAssessment,
    record: &PatientRecord,
    catalog: &[TimeSlot],
) -> SchedulingPlan {
    let plan = SchedulingPlan {
        overall_risk: assessment.overall_risk(),
        slots: recommend_slots(assessment, catalog),
        required_resources: derive_required_resources(assessment, record),
        estimated_duration: estimate_duration(record.surgery_complexity, assessment).to_string(),
        protocol: high_risk_protocol(assessment),
    };
    debug!(
        tier = %plan.overall_risk,
        slots = plan.slots.len(),
        resources = plan.required_resources.len(),
        "scheduling plan derived"
    );
    plan
}

#[cfg(test)]
mod tests {
    use periop_core::{CategoryScores, SurgeryComplexity, reference_catalog};

    use super::*;
    use crate::duration::HIGH_RISK_PROTOCOL;

    #[test]
    fn moderate_plan() {
        let assessment = RiskAssessment::from_scores(CategoryScores::new(3.3, 8.0, 7.5, 12.0), vec![]);
        let plan = plan_schedule(&assessment, &PatientRecord::default(), &reference_catalog());
        assert_eq!(plan.overall_risk, RiskTier::Moderate);
        assert_eq!(plan.recommended_slots().count(), 4);
        assert!(plan.is_standard_setup());
        assert_eq!(plan.estimated_duration, "2-4 hours");
        assert!(plan.protocol.is_none());
    }

    #[test]
    fn high_plan() {
        let mut record = PatientRecord::default();
        record.surgery_complexity = SurgeryComplexity::High;
        let assessment = RiskAssessment::from_scores(CategoryScores::new(8.0, 20.0, 16.0, 15.0), vec![]);
        let plan = plan_schedule(&assessment, &record, &reference_catalog());
        assert_eq!(plan.recommended_slots().count(), 1);
        assert_eq!(plan.required_resources.len(), 3);
        assert_eq!(
            plan.estimated_duration,
            "4-6 hours (+ 30 min buffer for high-risk)"
        );
        assert_eq!(plan.protocol, Some(HIGH_RISK_PROTOCOL));
    }

    #[test]
    fn plan_json_omits_protocol_when_absent() {
        let assessment = RiskAssessment::from_scores(CategoryScores::BASELINE, vec![]);
        let json = serde_json::to_value(plan_schedule(&assessment, &PatientRecord::default(), &[]))
            .unwrap();
        assert!(json.get("protocol").is_none());
        assert_eq!(json["overallRisk"], "Moderate");
        assert_eq!(json["requiredResources"], serde_json::json!([]));
    }
}

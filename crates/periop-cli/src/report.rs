//! Assessment report assembled for CLI output.

use periop_core::{PatientRecord, RiskAssessment, TimeSlot, ValidationError};
use periop_risk::assess_risk;
use periop_scheduling::{SchedulingPlan, plan_schedule};
use serde::Serialize;

/// Assessment plus the scheduling plan derived from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Risk profile.
    pub assessment: RiskAssessment,
    /// Slots, resources, duration, advisory.
    pub plan: SchedulingPlan,
}

/// Decode, validate, assess, and plan in one step.
pub fn build_report(input: &str, catalog: &[TimeSlot]) -> Result<AssessmentReport, ValidationError> {
    let record = PatientRecord::from_json(input)?;
    let assessment = assess_risk(&record)?;
    let plan = plan_schedule(&assessment, &record, catalog);
    Ok(AssessmentReport { assessment, plan })
}

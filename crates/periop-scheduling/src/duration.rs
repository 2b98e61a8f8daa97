//! Informational duration estimate and the high-risk staffing advisory.

use std::fmt;

use periop_core::{RiskAssessment, RiskTier, SurgeryComplexity};
use serde::Serialize;

/// Note appended to the estimate for High tier patients.
pub const HIGH_RISK_BUFFER_NOTE: &str = " (+ 30 min buffer for high-risk)";

/// Staffing advisory shown for High tier patients.
pub const HIGH_RISK_PROTOCOL: &str =
    "Schedule during peak staffing hours (7:30-11:30 AM) with senior surgical team";

/// Expected operating time, e.g. `"4-6 hours (+ 30 min buffer for high-risk)"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationEstimate {
    /// Range implied by surgical complexity.
    pub base_range: &'static str,
    /// Buffer note, present only for High tier patients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_note: Option<&'static str>,
}

impl fmt::Display for DurationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_range)?;
        if let Some(note) = self.buffer_note {
            f.write_str(note)?;
        }
        Ok(())
    }
}

/// Estimate operating time from complexity, padded for High tier patients.
pub fn estimate_duration(
    complexity: SurgeryComplexity,
    assessment: &RiskAssessment,
) -> DurationEstimate {
    let base_range = match complexity {
        SurgeryComplexity::Low => "1-2 hours",
        SurgeryComplexity::Moderate => "2-4 hours",
        SurgeryComplexity::High => "4-6 hours",
    };
    DurationEstimate {
        base_range,
        buffer_note: (assessment.overall_risk() == RiskTier::High).then_some(HIGH_RISK_BUFFER_NOTE),
    }
}

/// The staffing advisory, if the patient is High tier.
pub fn high_risk_protocol(assessment: &RiskAssessment) -> Option<&'static str> {
    (assessment.overall_risk() == RiskTier::High).then_some(HIGH_RISK_PROTOCOL)
}

#[cfg(test)]
mod tests {
    use periop_core::CategoryScores;

    use super::*;

    fn moderate() -> RiskAssessment {
        RiskAssessment::from_scores(CategoryScores::BASELINE, vec![])
    }

    fn high() -> RiskAssessment {
        RiskAssessment::from_scores(CategoryScores::new(2.5, 20.0, 5.5, 12.0), vec![])
    }

    #[test]
    fn ranges_by_complexity() {
        let a = moderate();
        assert_eq!(estimate_duration(SurgeryComplexity::Low, &a).to_string(), "1-2 hours");
        assert_eq!(estimate_duration(SurgeryComplexity::Moderate, &a).to_string(), "2-4 hours");
        assert_eq!(estimate_duration(SurgeryComplexity::High, &a).to_string(), "4-6 hours");
    }

    #[test]
    fn high_tier_adds_buffer() {
        let estimate = estimate_duration(SurgeryComplexity::High, &high());
        assert_eq!(
            estimate.to_string(),
            "4-6 hours (+ 30 min buffer for high-risk)"
        );
        assert_eq!(
            estimate_duration(SurgeryComplexity::Low, &high()).to_string(),
            "1-2 hours (+ 30 min buffer for high-risk)"
        );
    }

    #[test]
    fn protocol_only_for_high_tier() {
        assert_eq!(high_risk_protocol(&high()), Some(HIGH_RISK_PROTOCOL));
        assert_eq!(high_risk_protocol(&moderate()), None);
    }

    #[test]
    fn estimate_wire_shape_omits_missing_note() {
        let json = serde_json::to_value(estimate_duration(SurgeryComplexity::Low, &moderate()))
            .unwrap();
        assert_eq!(json, serde_json::json!({"baseRange": "1-2 hours"}));
    }
}

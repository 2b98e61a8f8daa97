//! Rule types.
//!
//! A [`RiskRule`] is data, not code: a [`RuleCondition`] tag tested against
//! the record, the [`CategoryScores`] it adds when it matches, and the
//! explained factor it reports. Rules never read each other's output, so
//! each one can be reasoned about and tested in isolation.

use periop_core::{CategoryScores, Comorbidity, PatientRecord, RiskFactor, SurgeryComplexity};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, RuleError};

/// Fields shared by every rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBase {
    /// Unique rule identifier, e.g. `"risk.advanced-age"`.
    pub id: String,
    /// Factor name reported when the rule fires.
    pub factor: String,
    /// Explanation reported when the rule fires.
    pub explanation: String,
    /// Relative weight in `[0, 1]`.
    pub impact: f64,
}

/// Predicate over a validated record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum RuleCondition {
    /// Age strictly above the given years.
    AgeAbove(u32),
    /// BMI strictly above the given value.
    BmiAbove(f64),
    /// The record lists the given comorbidity.
    HasComorbidity(Comorbidity),
    /// The planned surgery has exactly this complexity.
    ComplexityIs(SurgeryComplexity),
    /// Hemoglobin strictly below the given g/dL.
    HemoglobinBelow(f64),
}

impl RuleCondition {
    /// Test the condition. Total over any validated record.
    pub fn matches(&self, record: &PatientRecord) -> bool {
        match self {
            Self::AgeAbove(years) => record.demographics.age > *years,
            Self::BmiAbove(bmi) => record.demographics.bmi > *bmi,
            Self::HasComorbidity(condition) => record.has_comorbidity(*condition),
            Self::ComplexityIs(complexity) => record.surgery_complexity == *complexity,
            Self::HemoglobinBelow(level) => record.labs.hemoglobin < *level,
        }
    }
}

/// One entry of the rule table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRule {
    /// Identity and reporting fields.
    pub base: RuleBase,
    /// When the rule fires.
    pub condition: RuleCondition,
    /// What it adds to each category when it fires.
    pub deltas: CategoryScores,
}

impl RiskRule {
    /// Rule ID.
    pub fn id(&self) -> &str {
        &self.base.id
    }

    /// Return the score deltas if the rule fires for this record.
    pub fn evaluate(&self, record: &PatientRecord) -> Option<CategoryScores> {
        self.condition.matches(record).then_some(self.deltas)
    }

    /// The factor entry reported when this rule fires.
    pub fn to_factor(&self) -> RiskFactor {
        RiskFactor {
            factor: self.base.factor.clone(),
            impact: self.base.impact,
            explanation: self.base.explanation.clone(),
        }
    }

    /// Check the rule can only ever raise scores.
    ///
    /// Ceilings are the only clamp applied after evaluation, so deltas must be
    /// finite and non-negative, and the impact must be a weight in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| RuleError::InvalidRule {
            rule_id: self.base.id.clone(),
            message,
        };

        if self.base.id.trim().is_empty() {
            return Err(invalid("empty rule id".into()));
        }
        if !(0.0..=1.0).contains(&self.base.impact) {
            return Err(invalid(format!(
                "impact {} outside [0, 1]",
                self.base.impact
            )));
        }
        if !self.deltas.is_finite() {
            return Err(invalid("non-finite score delta".into()));
        }
        if !self.deltas.is_non_negative() {
            return Err(invalid("negative score delta".into()));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn rule(impact: f64, deltas: CategoryScores) -> RiskRule {
        RiskRule {
            base: RuleBase {
                id: "custom.test".into(),
                factor: "Test".into(),
                explanation: "Test rule".into(),
                impact,
            },
            condition: RuleCondition::AgeAbove(0),
            deltas,
        }
    }

    // ── RuleCondition ───────────────────────────────────────────────

    #[test]
    fn age_above_is_strict() {
        let mut record = PatientRecord::default();
        record.demographics.age = 65;
        assert!(!RuleCondition::AgeAbove(65).matches(&record));
        record.demographics.age = 66;
        assert!(RuleCondition::AgeAbove(65).matches(&record));
    }

    #[test]
    fn bmi_above_is_strict() {
        let mut record = PatientRecord::default();
        record.demographics.bmi = 30.0;
        assert!(!RuleCondition::BmiAbove(30.0).matches(&record));
        record.demographics.bmi = 30.1;
        assert!(RuleCondition::BmiAbove(30.0).matches(&record));
    }

    #[test]
    fn hemoglobin_below_is_strict() {
        let mut record = PatientRecord::default();
        record.labs.hemoglobin = 10.0;
        assert!(!RuleCondition::HemoglobinBelow(10.0).matches(&record));
        record.labs.hemoglobin = 9.9;
        assert!(RuleCondition::HemoglobinBelow(10.0).matches(&record));
    }

    #[test]
    fn comorbidity_and_complexity() {
        let record = PatientRecord::default();
        assert!(RuleCondition::HasComorbidity(Comorbidity::Hypertension).matches(&record));
        assert!(!RuleCondition::HasComorbidity(Comorbidity::Diabetes).matches(&record));
        assert!(RuleCondition::ComplexityIs(SurgeryComplexity::Moderate).matches(&record));
        assert!(!RuleCondition::ComplexityIs(SurgeryComplexity::High).matches(&record));
    }

    #[test]
    fn condition_wire_shape() {
        let json = serde_json::to_value(RuleCondition::HasComorbidity(Comorbidity::HeartDisease))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "hasComorbidity", "value": "Heart Disease"})
        );
    }

    // ── RiskRule ────────────────────────────────────────────────────

    #[test]
    fn evaluate_returns_deltas_only_when_matching() {
        let r = rule(0.5, CategoryScores::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(
            r.evaluate(&PatientRecord::default()),
            Some(CategoryScores::new(1.0, 0.0, 0.0, 0.0))
        );

        let mut never = r.clone();
        never.condition = RuleCondition::AgeAbove(200);
        assert_eq!(never.evaluate(&PatientRecord::default()), None);
    }

    #[test]
    fn to_factor_copies_reporting_fields() {
        let f = rule(0.25, CategoryScores::ZERO).to_factor();
        assert_eq!(f.factor, "Test");
        assert_eq!(f.explanation, "Test rule");
        assert!((f.impact - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_accepts_boundary_impacts() {
        assert!(rule(0.0, CategoryScores::ZERO).validate().is_ok());
        assert!(rule(1.0, CategoryScores::ZERO).validate().is_ok());
    }

    #[test]
    fn validate_rejects_impact_out_of_range() {
        let err = rule(1.5, CategoryScores::ZERO).validate().unwrap_err();
        assert!(err.to_string().contains("impact 1.5"));
        assert!(rule(f64::NAN, CategoryScores::ZERO).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_delta() {
        let err = rule(0.5, CategoryScores::new(0.0, 0.0, -1.0, 0.0))
            .validate()
            .unwrap_err();
        assert_matches!(err, RuleError::InvalidRule { ref message, .. } if message.contains("negative"));
    }

    #[test]
    fn validate_rejects_non_finite_delta() {
        let err = rule(0.5, CategoryScores::new(f64::INFINITY, 0.0, 0.0, 0.0))
            .validate()
            .unwrap_err();
        assert_matches!(err, RuleError::InvalidRule { ref message, .. } if message.contains("non-finite"));
    }

    #[test]
    fn validate_rejects_blank_id() {
        let mut r = rule(0.5, CategoryScores::ZERO);
        r.base.id = "  ".into();
        assert!(r.validate().is_err());
    }
}

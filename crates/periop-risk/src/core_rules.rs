//! Built-in risk rules.
//!
//! The fixed reference table, in evaluation order. Weights are constants,
//! not a fitted model.
//!
//! ## Rules (6)
//! - `risk.advanced-age`: age > 65
//! - `risk.obesity`: BMI > 30
//! - `risk.diabetes`: Diabetes listed
//! - `risk.hypertension`: Hypertension listed
//! - `risk.complex-surgery`: High complexity surgery
//! - `risk.low-hemoglobin`: hemoglobin < 10 g/dL

use periop_core::{CategoryScores, Comorbidity, SurgeryComplexity};

use crate::rules::{RiskRule, RuleBase, RuleCondition};

/// IDs of the built-in rules, in evaluation order.
pub const DEFAULT_RULE_IDS: &[&str] = &[
    "risk.advanced-age",
    "risk.obesity",
    "risk.diabetes",
    "risk.hypertension",
    "risk.complex-surgery",
    "risk.low-hemoglobin",
];

/// Build the reference rule table.
pub fn default_rules() -> Vec<RiskRule> {
    vec![
        advanced_age(),
        obesity(),
        diabetes(),
        hypertension(),
        complex_surgery(),
        low_hemoglobin(),
    ]
}

fn advanced_age() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.advanced-age".into(),
            factor: "Advanced Age".into(),
            explanation: "Age > 65 increases mortality and infection risk".into(),
            impact: 0.8,
        },
        condition: RuleCondition::AgeAbove(65),
        deltas: CategoryScores {
            mortality: 1.5,
            infection: 2.0,
            ..CategoryScores::ZERO
        },
    }
}

fn obesity() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.obesity".into(),
            factor: "Obesity".into(),
            explanation: "BMI > 30 increases infection and bleeding complications".into(),
            impact: 0.6,
        },
        condition: RuleCondition::BmiAbove(30.0),
        deltas: CategoryScores {
            infection: 3.0,
            bleeding: 1.5,
            ..CategoryScores::ZERO
        },
    }
}

fn diabetes() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.diabetes".into(),
            factor: "Diabetes".into(),
            explanation:
                "Diabetes significantly increases infection risk and healing complications".into(),
            impact: 0.9,
        },
        condition: RuleCondition::HasComorbidity(Comorbidity::Diabetes),
        deltas: CategoryScores {
            infection: 4.0,
            readmission: 3.0,
            ..CategoryScores::ZERO
        },
    }
}

fn hypertension() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.hypertension".into(),
            factor: "Hypertension".into(),
            explanation: "Hypertension increases cardiovascular and bleeding risks".into(),
            impact: 0.5,
        },
        condition: RuleCondition::HasComorbidity(Comorbidity::Hypertension),
        deltas: CategoryScores {
            mortality: 0.8,
            bleeding: 2.0,
            ..CategoryScores::ZERO
        },
    }
}

fn complex_surgery() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.complex-surgery".into(),
            factor: "Complex Surgery".into(),
            explanation: "High complexity surgery increases all risk categories".into(),
            impact: 0.7,
        },
        condition: RuleCondition::ComplexityIs(SurgeryComplexity::High),
        // Readmission is untouched despite the explanation.
        deltas: CategoryScores {
            mortality: 2.0,
            infection: 3.0,
            bleeding: 4.0,
            ..CategoryScores::ZERO
        },
    }
}

fn low_hemoglobin() -> RiskRule {
    RiskRule {
        base: RuleBase {
            id: "risk.low-hemoglobin".into(),
            factor: "Low Hemoglobin".into(),
            explanation: "Anemia increases mortality and bleeding complications".into(),
            impact: 0.6,
        },
        condition: RuleCondition::HemoglobinBelow(10.0),
        deltas: CategoryScores {
            mortality: 1.2,
            bleeding: 3.0,
            ..CategoryScores::ZERO
        },
    }
}

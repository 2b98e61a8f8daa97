//! Risk evaluation engine.
//!
//! Holds an immutable rule table and maps a [`PatientRecord`] to a
//! [`RiskAssessment`]: validate, start from the baselines, apply every
//! matching rule in table order, clamp, derive the tier. The engine keeps no
//! state between calls, so one instance can be shared across threads.

use std::collections::HashSet;
use std::sync::OnceLock;

use periop_core::{CategoryScores, PatientRecord, RiskAssessment, ValidationError};
use tracing::debug;

use crate::core_rules::default_rules;
use crate::errors::{Result, RuleError};
use crate::rules::RiskRule;

/// Built-in engine, created on first use.
static DEFAULT_ENGINE: OnceLock<RiskEngine> = OnceLock::new();

/// Main risk evaluation engine.
pub struct RiskEngine {
    rules: Vec<RiskRule>,
}

impl RiskEngine {
    /// Create an engine over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create an engine over a custom rule table.
    ///
    /// Every rule must validate and IDs must be unique. Table order is
    /// evaluation order.
    pub fn with_rules(rules: Vec<RiskRule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.id()) {
                return Err(RuleError::DuplicateRule {
                    rule_id: rule.id().to_string(),
                });
            }
        }

        debug!(rule_count = rules.len(), "RiskEngine initialized");
        Ok(Self { rules })
    }

    /// The rule table, in evaluation order.
    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    /// Look up a rule by ID.
    pub fn get_rule(&self, rule_id: &str) -> Option<&RiskRule> {
        self.rules.iter().find(|r| r.id() == rule_id)
    }

    /// Assess one record.
    ///
    /// Fails only if the record does not validate; nothing is scored in that
    /// case.
    pub fn assess(
        &self,
        record: &PatientRecord,
    ) -> std::result::Result<RiskAssessment, ValidationError> {
        record.validate()?;

        let mut scores = CategoryScores::BASELINE;
        let mut factors = Vec::new();

        for rule in &self.rules {
            if let Some(deltas) = rule.evaluate(record) {
                debug!(rule_id = %rule.id(), "risk rule triggered");
                scores = scores + deltas;
                factors.push(rule.to_factor());
            }
        }

        let assessment = RiskAssessment::from_scores(scores, factors);
        debug!(
            tier = %assessment.overall_risk(),
            factor_count = assessment.risk_factors().len(),
            "risk assessment complete"
        );
        Ok(assessment)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEngine")
            .field("rule_count", &self.rules.len())
            .finish()
    }
}

/// The shared engine over the built-in rule table.
pub fn default_engine() -> &'static RiskEngine {
    DEFAULT_ENGINE.get_or_init(RiskEngine::new)
}

/// Assess a record with the built-in rule table.
pub fn assess_risk(record: &PatientRecord) -> std::result::Result<RiskAssessment, ValidationError> {
    default_engine().assess(record)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

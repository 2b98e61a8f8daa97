//! Error types for the rule table.

use thiserror::Error;

/// Errors raised while building a [`RiskEngine`](crate::RiskEngine) from a rule table.
///
/// Scoring itself never fails once a record validates; these only guard
/// the shape of the table.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule's weights or deltas are unusable.
    #[error("invalid rule {rule_id}: {message}")]
    InvalidRule {
        /// The ID of the offending rule.
        rule_id: String,
        /// Description of the problem.
        message: String,
    },

    /// Two rules share an ID.
    #[error("duplicate rule id: {rule_id}")]
    DuplicateRule {
        /// The repeated ID.
        rule_id: String,
    },
}

/// Result type for rule table operations.
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rule_display() {
        let err = RuleError::InvalidRule {
            rule_id: "risk.custom".into(),
            message: "impact 1.5 outside [0, 1]".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rule risk.custom: impact 1.5 outside [0, 1]"
        );
    }

    #[test]
    fn duplicate_rule_display() {
        let err = RuleError::DuplicateRule {
            rule_id: "risk.obesity".into(),
        };
        assert_eq!(err.to_string(), "duplicate rule id: risk.obesity");
    }
}

//! Validation error types.

use thiserror::Error;

/// Errors raised while turning caller input into a scoreable [`PatientRecord`].
///
/// All of these fire before any rule is evaluated; once a record validates,
/// scoring cannot fail.
///
/// [`PatientRecord`]: crate::PatientRecord
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input could not be decoded: missing field, wrong type, or a value
    /// outside an enumerated vocabulary.
    #[error("malformed patient record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A numeric field was NaN or infinite.
    #[error("non-finite value for {field}")]
    NonFinite {
        /// Dotted path of the offending field.
        field: &'static str,
    },

    /// A numeric field was finite but outside its permitted range.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A string did not name a term of the given vocabulary.
    #[error("unknown {vocabulary}: {value:?}")]
    UnknownTerm {
        /// Vocabulary name (e.g. `"comorbidity"`).
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let err = ValidationError::from(json_err);
        assert!(err.to_string().starts_with("malformed patient record:"));
    }

    #[test]
    fn non_finite_display() {
        let err = ValidationError::NonFinite {
            field: "labs.hemoglobin",
        };
        assert_eq!(err.to_string(), "non-finite value for labs.hemoglobin");
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange {
            field: "vitals.oxygenSaturation",
            value: 120.0,
        };
        assert_eq!(err.to_string(), "vitals.oxygenSaturation out of range: 120");
    }

    #[test]
    fn unknown_term_display() {
        let err = ValidationError::UnknownTerm {
            vocabulary: "comorbidity",
            value: "Asthma".into(),
        };
        assert_eq!(err.to_string(), "unknown comorbidity: \"Asthma\"");
    }
}

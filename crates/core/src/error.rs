//! Error taxonomy for the analysis core.
//!
//! Record-level failures (`MalformedRecord`) isolate to a single input record
//! so a batch can continue; configuration failures are fatal and must be
//! surfaced before any processing begins. The absence of a sentiment match
//! during correlation is a valid empty result, not an error, and therefore
//! has no variant here.

use thiserror::Error;

/// Errors produced by the insider-analysis core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A single input record could not be normalized. Tagged with the
    /// offending field so the caller can report it precisely.
    #[error("malformed record: field `{field}`: {reason}")]
    MalformedRecord {
        /// Name of the field that failed validation.
        field: String,
        /// Human-readable description of the failure.
        reason: String,
    },

    /// Invalid configuration supplied at startup. Fatal.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Builds a `MalformedRecord` error for the given field.
    #[must_use]
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error isolates to a single record.
    #[must_use]
    pub fn is_record_level(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_names_the_field() {
        let err = CoreError::malformed("shares", "negative value");
        assert_eq!(
            err.to_string(),
            "malformed record: field `shares`: negative value"
        );
    }

    #[test]
    fn malformed_record_is_record_level() {
        assert!(CoreError::malformed("price", "not a number").is_record_level());
    }

    #[test]
    fn configuration_error_is_not_record_level() {
        assert!(!CoreError::Configuration("bad window".to_string()).is_record_level());
    }
}

use thiserror::Error;

/// Validation errors for shaped identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a value is not one of an enumerated set.
    #[error("{field} ('{value}') is not a recognized value")]
    UnknownVariant {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

use thiserror::Error;

/// Why an event was rejected.
///
/// The `Display` form is the exact message placed in the envelope's `errors`
/// list, so variants must not be reworded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The event is not a JSON object.
    #[error("Event must be a dictionary")]
    NotAnObject,
    /// The `type` field is absent or falsy.
    #[error("Missing event type")]
    MissingType,
    /// The `type` field names no known event kind.
    #[error("Unsupported event type: {0}")]
    UnsupportedType(String),
    /// A required field is absent.
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    /// A field holds a value of the wrong JSON type or range.
    #[error("{field} must be {expected}")]
    WrongType {
        /// Offending field.
        field: &'static str,
        /// Description of the accepted values (e.g. `int`, `string`).
        expected: &'static str,
    },
    /// A numeric field is zero or negative.
    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),
    /// A field failed a shape or allowed-value check.
    #[error("Invalid {0}")]
    Invalid(&'static str),
}

impl Rejection {
    /// Shorthand for [`Rejection::WrongType`].
    pub fn wrong_type(field: &'static str, expected: &'static str) -> Self {
        Rejection::WrongType { field, expected }
    }
}

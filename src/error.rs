//! Errors reported by view models

use thiserror::Error;

/// Why a record could not be created.
///
/// Apart from [`ValidationError::IdentifiersExhausted`], this is recoverable: the user can fix the form and submit it again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The collection has handed out every possible identifier
    #[error("no identifier is left for a new record")]
    IdentifiersExhausted,
}

impl ValidationError {
    pub fn invalid<S: ToString>(field: &'static str, reason: S) -> Self {
        Self::InvalidField { field, reason: reason.to_string() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ValidationError::MissingFields(vec!["title", "assignee"]);
        assert_eq!(err.to_string(), "missing required field(s): title, assignee");

        let err = ValidationError::invalid("due_date", "expected YYYY-MM-DD");
        assert_eq!(err.to_string(), "invalid value for 'due_date': expected YYYY-MM-DD");
    }
}

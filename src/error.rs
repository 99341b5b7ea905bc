//! Error types for row validation and batch import.

use thiserror::Error;

/// A single CSV row that could not be coerced into a meeting.
///
/// `row` is 1-based, counted over data rows (the header is not a row).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Row {row}: {message}")]
pub struct ValidationError {
    pub row: usize,
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    /// No row in the batch validated; nothing was written.
    #[error("CSV validation failed: {} row error(s), no valid rows", errors.len())]
    Rejected { errors: Vec<ValidationError> },

    #[error("record store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl ImportError {
    /// Human-readable row messages, empty for store failures.
    pub fn row_messages(&self) -> Vec<String> {
        match self {
            ImportError::Rejected { errors } => errors.iter().map(ToString::to_string).collect(),
            ImportError::Store(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(3, "Duration_Minutes: expected a number, got \"abc\"");
        assert_eq!(
            err.to_string(),
            "Row 3: Duration_Minutes: expected a number, got \"abc\""
        );
    }

    #[test]
    fn test_rejected_lists_row_messages() {
        let err = ImportError::Rejected {
            errors: vec![
                ValidationError::new(1, "bad"),
                ValidationError::new(2, "worse"),
            ],
        };
        assert_eq!(err.row_messages(), vec!["Row 1: bad", "Row 2: worse"]);
        assert!(err.to_string().contains("2 row error(s)"));
    }
}

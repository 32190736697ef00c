//! Error types for the extractor.
//!
//! The engine has exactly one fatal condition: input that is not
//! well-formed XML. Every other irregularity (missing sections, absent
//! fields, unrecognized values) is resolved locally and encoded as an
//! absent field in the output record.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be parsed as well-formed XML.
    #[error("Malformed XML input: {detail}")]
    Malformed { detail: String },
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::Malformed {
            detail: "unexpected end of stream".to_string(),
        };
        assert!(err.to_string().contains("Malformed XML input"));
        assert!(err.to_string().contains("unexpected end of stream"));
    }
}

//! Error handling for Voxtex
//!
//! This module provides a unified error type and result type for the
//! fallible operations around the conversion engine: note storage, plot
//! expressions and input validation. The conversion engine itself never
//! fails; unrecognised phrases pass through unchanged.

use std::fmt;

/// Voxtex error type
#[derive(Debug, Clone)]
pub enum DictationError {
    /// Invalid input - e.g. saving an empty note
    InvalidInput { message: String },
    /// Stored data exists but cannot be decoded
    CorruptStore { key: String, message: String },
    /// A plot expression the plotter cannot parse
    PlotExpression {
        message: String,
        position: Option<usize>,
    },
    /// Unsupported host capability
    Unsupported {
        feature: String,
        suggestion: Option<String>,
    },
    /// IO error (for file-backed storage)
    IoError { message: String },
    /// Serialization error
    SerializationError { message: String },
}

impl fmt::Display for DictationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictationError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            DictationError::CorruptStore { key, message } => {
                write!(f, "Stored data under '{}' is corrupt: {}", key, message)
            }
            DictationError::PlotExpression { message, position } => {
                if let Some(pos) = position {
                    write!(f, "Plot expression error at {}: {}", pos, message)
                } else {
                    write!(f, "Plot expression error: {}", message)
                }
            }
            DictationError::Unsupported {
                feature,
                suggestion,
            } => {
                if let Some(sug) = suggestion {
                    write!(f, "Unsupported feature '{}'. {}", feature, sug)
                } else {
                    write!(f, "Unsupported feature: {}", feature)
                }
            }
            DictationError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            DictationError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for DictationError {}

impl From<std::io::Error> for DictationError {
    fn from(err: std::io::Error) -> Self {
        DictationError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DictationError {
    fn from(err: serde_json::Error) -> Self {
        DictationError::SerializationError {
            message: err.to_string(),
        }
    }
}

/// Result type for Voxtex operations
pub type DictationResult<T> = Result<T, DictationError>;

// Convenience constructors for errors
impl DictationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DictationError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        DictationError::CorruptStore {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn plot(message: impl Into<String>) -> Self {
        DictationError::PlotExpression {
            message: message.into(),
            position: None,
        }
    }

    pub fn plot_at(message: impl Into<String>, position: usize) -> Self {
        DictationError::PlotExpression {
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn unsupported_with_suggestion(
        feature: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        DictationError::Unsupported {
            feature: feature.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// True for errors caused by stored data rather than by the caller.
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, DictationError::CorruptStore { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = DictationError::invalid("Nothing to save!");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("Nothing to save!"));
    }

    #[test]
    fn test_plot_error_with_position() {
        let err = DictationError::plot_at("unexpected ')'", 4);
        let msg = err.to_string();
        assert!(msg.contains("at 4"));
        assert!(msg.contains("unexpected ')'"));
    }

    #[test]
    fn test_unsupported_feature() {
        let err = DictationError::unsupported_with_suggestion(
            "speech recognition",
            "Please use Chrome or Edge.",
        );
        let msg = err.to_string();
        assert!(msg.contains("speech recognition"));
        assert!(msg.contains("Chrome"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: DictationError = serde_json::from_str::<Vec<u8>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, DictationError::SerializationError { .. }));
        assert!(!err.is_corrupt_store());
    }
}

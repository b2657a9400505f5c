//! Error types for DTO decoding.
//!
//! # Design
//!
//! - Constant error messages; context lives in fields.
//! - Keep the source error so callers can log the underlying parse failure.

use thiserror::Error;

/// Result type for DTO helpers.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors produced while decoding REST payloads.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Payload was not valid JSON for the requested shape.
    #[error("model json decode failed")]
    Decode {
        /// Payload kind that failed to decode.
        kind: &'static str,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::ModelError;

    #[test]
    fn messages_stay_constant() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = ModelError::Decode {
            kind: "failure",
            source,
        };
        assert_eq!(err.to_string(), "model json decode failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}

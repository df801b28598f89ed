//! Error type shared by the codec, the length calculator and the merger.

use thiserror::Error;

/// Portable error kind, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    MalformedEncoding,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// An argument has the wrong type or shape.
    #[error("invalid {argument}: {reason}, got {value}")]
    InvalidInput {
        argument: &'static str,
        value: String,
        reason: &'static str,
    },
    /// The encoded text cannot be decoded.
    #[error("malformed polyline at byte {position}: {reason}")]
    MalformedEncoding {
        position: usize,
        reason: &'static str,
    },
}

impl PolylineError {
    pub fn invalid_input(
        argument: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        PolylineError::InvalidInput {
            argument,
            value: value.to_string(),
            reason,
        }
    }

    pub fn malformed(position: usize, reason: &'static str) -> Self {
        PolylineError::MalformedEncoding { position, reason }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PolylineError::InvalidInput { .. } => ErrorKind::InvalidInput,
            PolylineError::MalformedEncoding { .. } => ErrorKind::MalformedEncoding,
        }
    }
}

pub type Result<T> = std::result::Result<T, PolylineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_argument_and_value() {
        let err = PolylineError::invalid_input("polyline", 123, "expected a string");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let message = err.to_string();
        assert!(message.contains("polyline"));
        assert!(message.contains("123"));
    }

    #[test]
    fn test_malformed_message_names_position() {
        let err = PolylineError::malformed(7, "truncated varint");
        assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
        assert!(err.to_string().contains("byte 7"));
    }
}

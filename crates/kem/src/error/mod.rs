//! Error handling for key exchange operations

use nttkex_algorithms::error::Error as PrimitiveError;
use nttkex_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for key exchange operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Primitive error
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Invalid key format
    #[error("invalid {key_type} key: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: String,
    },

    /// Invalid ciphertext format
    #[error("invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        algorithm: &'static str,
        reason: String,
    },

    /// Entropy of the wrong size
    #[error("entropy must be {expected} bytes, got {actual}")]
    EntropyLength { expected: usize, actual: usize },

    /// Sender and receiver shared values differ
    #[error("key agreement failed for {algorithm}")]
    KeyAgreement { algorithm: &'static str },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True when the underlying cause is rejected ring parameters
    pub fn is_parameter_invalid(&self) -> bool {
        matches!(self, Error::Primitive(PrimitiveError::Parameter { .. }))
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason,
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason,
            },
            Error::EntropyLength { expected, actual } => {
                CoreError::EntropyLengthInvalid { expected, actual }
            }
            Error::KeyAgreement { algorithm } => CoreError::KeyAgreement { context: algorithm },
        }
    }
}

// Include validation submodule
pub mod validate;

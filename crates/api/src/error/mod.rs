//! Error handling for the nttkex ecosystem
//!
//! Every layer (arithmetic, transform, protocol) keeps its own error enum and
//! converts into [`Error`] at the public boundary, so callers only ever match
//! on one categorized type.

use thiserror::Error as ThisError;

/// Primary error type for key exchange operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Ring parameters rejected before any key material exists
    /// (`n` not a positive power of two, `q` not prime, or `q <= n`).
    #[error("invalid parameter: {context}: {message}")]
    ParameterInvalid {
        context: &'static str,
        message: String,
    },

    /// Derived entropy is not exactly the size downstream consumers expect.
    #[error("invalid entropy length (expected {expected}, got {actual})")]
    EntropyLengthInvalid {
        expected: usize,
        actual: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid key error
    #[error("invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Sender and receiver derived different shared values
    #[error("key agreement failed: {context}")]
    KeyAgreement {
        context: &'static str,
    },

    /// Random generation error
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `ParameterInvalid` error
    pub fn parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::ParameterInvalid {
            context,
            message: message.into(),
        }
    }

    /// True for errors raised by parameter validation
    pub fn is_parameter_invalid(&self) -> bool {
        matches!(self, Self::ParameterInvalid { .. })
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGeneration {
            context: "rng",
            message: e.to_string(),
        }
    }
}

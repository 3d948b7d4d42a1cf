//! Error handling for polynomial and transform primitives

use std::borrow::Cow;

use nttkex_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for polynomial and transform primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected number of elements
        expected: usize,
        /// Actual number of elements
        actual: usize,
    },

    /// A coefficient outside `[0, modulus)`
    #[error("coefficient {index} of {context} is {value}, outside [0, {modulus})")]
    Range {
        /// What was being checked
        context: &'static str,
        /// Position of the offending coefficient
        index: usize,
        /// The offending value
        value: u32,
        /// The modulus it must stay below
        modulus: u32,
    },

    /// The random number generator failed
    #[error("random generation failed: {details}")]
    Rng {
        /// Message reported by the generator
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for polynomial and transform primitives
pub type Result<T> = core::result::Result<T, Error>;

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::Rng {
            details: e.to_string(),
        }
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::parameter(name, reason),
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Range {
                context,
                index,
                value,
                modulus,
            } => CoreError::Other {
                context,
                message: format!("coefficient {index} is {value}, outside [0, {modulus})"),
            },
            Error::Rng { details } => CoreError::RandomGeneration {
                context: "polynomial sampling",
                message: details,
            },
        }
    }
}

pub mod validate;

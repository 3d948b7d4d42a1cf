//! Validation utilities for key exchange operations

use super::{Error, Result};

/// Validate the size of an entropy value
pub fn entropy_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::EntropyLength { expected, actual });
    }
    Ok(())
}

/// Validate that both parties derived the same value
pub fn agreement(agreed: bool, algorithm: &'static str) -> Result<()> {
    if !agreed {
        return Err(Error::KeyAgreement { algorithm });
    }
    Ok(())
}

/// Validate a key's shape, reporting the primitive failure as a key error
pub fn key<T, E: core::fmt::Display>(
    checked: core::result::Result<T, E>,
    key_type: &'static str,
) -> Result<T> {
    checked.map_err(|e| Error::InvalidKey {
        key_type,
        reason: e.to_string(),
    })
}

/// Validate a ciphertext's shape, reporting the primitive failure as a ciphertext error
pub fn ciphertext<T, E: core::fmt::Display>(
    checked: core::result::Result<T, E>,
    algorithm: &'static str,
) -> Result<T> {
    checked.map_err(|e| Error::InvalidCiphertext {
        algorithm,
        reason: e.to_string(),
    })
}

//! Validation utilities for polynomial and transform primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that every coefficient lies in `[0, modulus)`
#[inline]
pub fn coefficients(context: &'static str, coeffs: &[u32], modulus: u32) -> Result<()> {
    match coeffs.iter().position(|&c| c >= modulus) {
        Some(index) => Err(Error::Range {
            context,
            index,
            value: coeffs[index],
            modulus,
        }),
        None => Ok(()),
    }
}

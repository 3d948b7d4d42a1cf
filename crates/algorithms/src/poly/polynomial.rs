//! polynomial.rs - Fixed-length coefficient vectors over `Z_q`

use super::arith;
use super::params::PolyParams;
use crate::error::{validate, Result};
use zeroize::Zeroize;

/// An ordered sequence of exactly `n` coefficients, each in `[0, q)`.
///
/// The length and range invariants are checked whenever a polynomial is built
/// from outside data, and every operation in this crate preserves them.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    coeffs: Vec<u32>,
}

impl Polynomial {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero(params: &PolyParams) -> Self {
        Self {
            coeffs: vec![0; params.n()],
        }
    }

    /// Creates a polynomial from a slice of coefficients
    pub fn from_coeffs(params: &PolyParams, coeffs: &[u32]) -> Result<Self> {
        let poly = Self {
            coeffs: coeffs.to_vec(),
        };
        poly.check(params)?;
        Ok(poly)
    }

    /// Checks the length and range invariants against `params`
    pub fn check(&self, params: &PolyParams) -> Result<()> {
        validate::length("polynomial coefficients", self.coeffs.len(), params.n())?;
        validate::coefficients("polynomial", &self.coeffs, params.q())
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True only for the degenerate zero-length vector
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    pub(crate) fn as_mut_coeffs_slice(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// Coefficient-wise addition modulo q
    pub fn add(&self, other: &Self, params: &PolyParams) -> Result<Self> {
        self.zip_with(other, params, arith::add)
    }

    /// Coefficient-wise subtraction modulo q
    pub fn sub(&self, other: &Self, params: &PolyParams) -> Result<Self> {
        self.zip_with(other, params, arith::sub)
    }

    /// Coefficient-wise (pointwise) multiplication modulo q
    pub fn pointwise_mul(&self, other: &Self, params: &PolyParams) -> Result<Self> {
        self.zip_with(other, params, arith::mul)
    }

    fn zip_with(
        &self,
        other: &Self,
        params: &PolyParams,
        op: fn(u32, u32, u32) -> u32,
    ) -> Result<Self> {
        validate::length("left operand", self.len(), params.n())?;
        validate::length("right operand", other.len(), params.n())?;

        let q = params.q();
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| op(a, b, q))
            .collect();
        Ok(Self { coeffs })
    }
}

impl AsRef<[u32]> for Polynomial {
    fn as_ref(&self) -> &[u32] {
        &self.coeffs
    }
}

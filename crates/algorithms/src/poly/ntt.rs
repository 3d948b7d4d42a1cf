//! ntt.rs - Butterfly-network transform over `Z_q^n`
//!
//! The forward transform is a decimation-in-frequency network: widths run
//! from `n/2` down to `1` while the twiddle step doubles. The backward
//! transform walks the same network in reverse (widths `1` up to `n/2`, step
//! halving) and undoes each butterfly exactly.
//!
//! ## Twiddle indexing
//! Within a pass of width `m` and step `s`, column `j` uses twiddle index
//! `(-j * s) mod n`, produced incrementally by `index = (index + n - s) mod n`.
//! Both directions use the same index sequence for a given width.
//!
//! ## Exact inversion
//! A forward butterfly maps `(a, b)` to `(a + b, (a - b) * W[k])`. Since
//! `W_rev[k] = -W[k] mod q`, multiplying the second output by `W_rev[k]^-1`
//! gives `t1 = b - a`, and the backward butterfly writes `(t0 - t1, t0 + t1)`,
//! which is `(2a, 2b)`. The accumulated factor `2^log2(n) = n` is removed by a
//! single scaling with `n^-1` at the end.

use super::arith::{add, mul, normalize, sub};
use super::params::PolyParams;
use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Trait for the forward transform
pub trait TransformOperator {
    /// Performs the forward transform in place on exactly `n` coefficients
    fn forward(params: &PolyParams, coeffs: &mut [u32]) -> Result<()>;
}

/// Trait for the backward transform
pub trait InverseTransformOperator {
    /// Performs the backward transform in place on exactly `n` coefficients
    fn backward(params: &PolyParams, coeffs: &mut [u32]) -> Result<()>;
}

/// The butterfly network driven by the `W` / `W_rev` tables
pub struct ButterflyTransform;

/// Advance a twiddle index by `-step` modulo `n`
#[inline(always)]
fn advance(index: usize, n: usize, step: usize) -> usize {
    normalize((index + (n - step)) as i64, n as u32) as usize
}

impl TransformOperator for ButterflyTransform {
    fn forward(params: &PolyParams, coeffs: &mut [u32]) -> Result<()> {
        let n = params.n();
        validate::length("forward transform input", coeffs.len(), n)?;

        let q = params.q();
        let w = params.twiddles();

        let mut m = n >> 1;
        let mut step = 1_usize;
        while m >= 1 {
            let mut index = 0_usize;
            for j in 0..m {
                for i in (j..n).step_by(m << 1) {
                    let t0 = add(coeffs[i], coeffs[i + m], q);
                    let t1 = mul(sub(coeffs[i], coeffs[i + m], q), w[index], q);
                    coeffs[i] = t0;
                    coeffs[i + m] = t1;
                }
                index = advance(index, n, step);
            }
            m >>= 1;
            step <<= 1;
        }

        Ok(())
    }
}

impl InverseTransformOperator for ButterflyTransform {
    fn backward(params: &PolyParams, coeffs: &mut [u32]) -> Result<()> {
        let n = params.n();
        validate::length("backward transform input", coeffs.len(), n)?;

        let q = params.q();
        let w_rev_inv = params.twiddles_rev_inv();

        let mut m = 1_usize;
        let mut step = n >> 1;
        while m < n {
            let mut index = 0_usize;
            for j in 0..m {
                for i in (j..n).step_by(m << 1) {
                    let t0 = coeffs[i];
                    let t1 = mul(coeffs[i + m], w_rev_inv[index], q);
                    coeffs[i] = sub(t0, t1, q);
                    coeffs[i + m] = add(t0, t1, q);
                }
                index = advance(index, n, step);
            }
            m <<= 1;
            step >>= 1;
        }

        // Each pass doubled every coefficient
        let n_inv = params.n_inv();
        for c in coeffs.iter_mut() {
            *c = mul(*c, n_inv, q);
        }

        Ok(())
    }
}

/// Transform methods on Polynomial
impl Polynomial {
    /// Forward transform in place
    pub fn forward_inplace(&mut self, params: &PolyParams) -> Result<()> {
        ButterflyTransform::forward(params, self.as_mut_coeffs_slice())
    }

    /// Backward transform in place
    pub fn backward_inplace(&mut self, params: &PolyParams) -> Result<()> {
        ButterflyTransform::backward(params, self.as_mut_coeffs_slice())
    }

    /// Forward transform of a copy; `self` is left untouched
    pub fn forward(&self, params: &PolyParams) -> Result<Self> {
        let mut out = self.clone();
        out.forward_inplace(params)?;
        Ok(out)
    }

    /// Backward transform of a copy; `self` is left untouched
    pub fn backward(&self, params: &PolyParams) -> Result<Self> {
        let mut out = self.clone();
        out.backward_inplace(params)?;
        Ok(out)
    }
}

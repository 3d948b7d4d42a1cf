//! params.rs - Validated ring parameters and twiddle tables

use super::arith::{inv_mod, normalize};
use crate::error::{validate, Error, Result};
use nttkex_params::kex::{NTT_KEX_N, NTT_KEX_Q};
use tracing::{debug, warn};

/// Ring parameters together with the precomputed twiddle tables.
///
/// This is the one configuration object every component receives. It is built
/// once, validated on construction and never mutated afterwards, so it can be
/// shared freely by reference.
///
/// The tables are `W[i] = (i + 1) mod q` and `W_rev[i] = (q - i - 1) mod q`.
/// They are not powers of a primitive root of unity: the transform they drive
/// is an invertible linear map, not polynomial-ring multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyParams {
    n: usize,
    q: u32,
    twiddles: Vec<u32>,
    twiddles_rev: Vec<u32>,
    /// `W_rev[i]^-1 mod q`, consumed by the backward butterfly.
    twiddles_rev_inv: Vec<u32>,
    /// `n^-1 mod q`, the final scaling of the backward transform.
    n_inv: u32,
}

impl PolyParams {
    /// Validate `n` and `q` and build the twiddle tables.
    ///
    /// Fails with a parameter error, before anything else happens, when `n`
    /// is not a positive power of two, `q` is not prime, or `q <= n`.
    pub fn new(n: usize, q: u32) -> Result<Self> {
        if let Err(e) = Self::validate(n, q) {
            warn!(n, q, error = %e, "rejected ring parameters");
            return Err(e);
        }

        let twiddles: Vec<u32> = (0..n).map(|i| normalize(i as i64 + 1, q)).collect();
        let twiddles_rev: Vec<u32> = (0..n)
            .map(|i| normalize(q as i64 - i as i64 - 1, q))
            .collect();
        let twiddles_rev_inv = twiddles_rev.iter().map(|&w| inv_mod(w, q)).collect();
        let n_inv = inv_mod(normalize(n as i64, q), q);

        debug!(n, q, "built twiddle tables");

        Ok(Self {
            n,
            q,
            twiddles,
            twiddles_rev,
            twiddles_rev_inv,
            n_inv,
        })
    }

    /// Production parameter set from `nttkex-params`.
    pub fn production() -> Result<Self> {
        Self::new(NTT_KEX_N, NTT_KEX_Q)
    }

    fn validate(n: usize, q: u32) -> Result<()> {
        if !is_power_of_two(n) {
            return Err(Error::param(
                "ring dimension",
                format!("n = {} is not a positive power of two", n),
            ));
        }
        if !is_prime(q) {
            return Err(Error::param("modulus", format!("q = {} is not prime", q)));
        }
        validate::parameter(
            q as u64 > n as u64,
            "modulus",
            "q must be greater than n",
        )
    }

    /// Ring dimension `n`
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Coefficient modulus `q`
    #[inline]
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Forward twiddle table `W`
    #[inline]
    pub fn twiddles(&self) -> &[u32] {
        &self.twiddles
    }

    /// Backward twiddle table `W_rev`
    #[inline]
    pub fn twiddles_rev(&self) -> &[u32] {
        &self.twiddles_rev
    }

    #[inline]
    pub(crate) fn twiddles_rev_inv(&self) -> &[u32] {
        &self.twiddles_rev_inv
    }

    #[inline]
    pub(crate) fn n_inv(&self) -> u32 {
        self.n_inv
    }
}

/// Check if a number is prime (trial division)
pub fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    if q < 4 {
        return true;
    }
    if q % 2 == 0 {
        return false;
    }

    let q = q as u64;
    let mut i = 3u64;
    while i * i <= q {
        if q % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check if N is a positive power of 2
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

//! sampling.rs - Uniform sampling of polynomials

use super::params::PolyParams;
use super::polynomial::Polynomial;
use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Trait for sampling polynomials uniformly at random
pub trait UniformSampler {
    /// Samples a polynomial with `n` independent coefficients uniform in `[0, q)`
    fn sample_uniform<R: RngCore + CryptoRng>(
        params: &PolyParams,
        rng: &mut R,
    ) -> Result<Polynomial>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_uniform<R: RngCore + CryptoRng>(
        params: &PolyParams,
        rng: &mut R,
    ) -> Result<Polynomial> {
        let mut poly = Polynomial::zero(params);
        let q = params.q();

        // Handle different modulus sizes
        if q <= (1 << 16) {
            sample_with_width::<R, 2>(rng, q, poly.as_mut_coeffs_slice())?;
        } else if q <= (1 << 24) {
            sample_with_width::<R, 3>(rng, q, poly.as_mut_coeffs_slice())?;
        } else {
            sample_with_width::<R, 4>(rng, q, poly.as_mut_coeffs_slice())?;
        }

        Ok(poly)
    }
}

/// Rejection sampling from `W`-byte little-endian words.
///
/// Words at or above the largest multiple of `q` that fits are discarded so
/// that every residue is equally likely.
fn sample_with_width<R: RngCore + CryptoRng, const W: usize>(
    rng: &mut R,
    q: u32,
    coeffs: &mut [u32],
) -> Result<()> {
    let range = 1u64 << (8 * W);
    let threshold = (range / q as u64) * q as u64;

    for c in coeffs.iter_mut() {
        loop {
            let mut bytes = [0u8; 8];
            rng.try_fill_bytes(&mut bytes[..W])?;
            let sample = u64::from_le_bytes(bytes);

            if sample < threshold {
                *c = (sample % q as u64) as u32;
                break;
            }
        }
    }

    Ok(())
}

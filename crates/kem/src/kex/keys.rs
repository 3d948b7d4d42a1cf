//! Key, ciphertext and shared-secret types.
//!
//! Each type wraps one [`Polynomial`]. Values built from outside data are
//! checked against a [`KexContext`] so their length is `n` and every
//! coefficient lies in `[0, q)`.

use core::fmt;

use nttkex_algorithms::Polynomial;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::context::KexContext;
use crate::error::{validate, Result};

/// Secret polynomial with uniformly random coefficients.
///
/// Zeroized on drop; `Debug` never prints coefficients.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Polynomial);

/// Forward transform of a [`PrivateKey`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Polynomial);

/// Forward transform of the encapsulation randomness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext(Polynomial);

/// The value both parties derive.
///
/// Zeroized on drop; equality is constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Polynomial);

impl PrivateKey {
    /// Build a private key from raw coefficients.
    pub fn from_coeffs(context: &KexContext, coeffs: &[u32]) -> Result<Self> {
        validate::key(Polynomial::from_coeffs(context.params(), coeffs), "private").map(Self)
    }

    /// The coefficients.
    pub fn as_coeffs(&self) -> &[u32] {
        self.0.as_coeffs_slice()
    }

    pub(crate) fn new(poly: Polynomial) -> Self {
        Self(poly)
    }

    pub(crate) fn as_poly(&self) -> &Polynomial {
        &self.0
    }
}

impl PublicKey {
    /// Build a public key from raw coefficients.
    pub fn from_coeffs(context: &KexContext, coeffs: &[u32]) -> Result<Self> {
        validate::key(Polynomial::from_coeffs(context.params(), coeffs), "public").map(Self)
    }

    /// The coefficients.
    pub fn as_coeffs(&self) -> &[u32] {
        self.0.as_coeffs_slice()
    }

    pub(crate) fn new(poly: Polynomial) -> Self {
        Self(poly)
    }

    pub(crate) fn as_poly(&self) -> &Polynomial {
        &self.0
    }
}

impl Ciphertext {
    /// Build a ciphertext from raw coefficients.
    pub fn from_coeffs(context: &KexContext, coeffs: &[u32]) -> Result<Self> {
        validate::ciphertext(
            Polynomial::from_coeffs(context.params(), coeffs),
            context.name(),
        )
        .map(Self)
    }

    /// The coefficients.
    pub fn as_coeffs(&self) -> &[u32] {
        self.0.as_coeffs_slice()
    }

    pub(crate) fn new(poly: Polynomial) -> Self {
        Self(poly)
    }

    pub(crate) fn as_poly(&self) -> &Polynomial {
        &self.0
    }
}

impl SharedSecret {
    /// The coefficients, in the order entropy derivation consumes them.
    pub fn as_coeffs(&self) -> &[u32] {
        self.0.as_coeffs_slice()
    }

    pub(crate) fn new(poly: Polynomial) -> Self {
        Self(poly)
    }
}

impl AsRef<[u32]> for PublicKey {
    fn as_ref(&self) -> &[u32] {
        self.as_coeffs()
    }
}

impl AsRef<[u32]> for Ciphertext {
    fn as_ref(&self) -> &[u32] {
        self.as_coeffs()
    }
}

impl AsRef<[u32]> for PrivateKey {
    fn as_ref(&self) -> &[u32] {
        self.as_coeffs()
    }
}

impl AsRef<[u32]> for SharedSecret {
    fn as_ref(&self) -> &[u32] {
        self.as_coeffs()
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_coeffs().ct_eq(other.as_coeffs())
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("n", &self.0.len())
            .finish_non_exhaustive()
    }
}

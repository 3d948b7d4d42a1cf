//! Entropy derivation from a shared secret.
//!
//! Each coefficient is rendered as decimal ASCII digits and fed, in order and
//! without separators, into SHA-256. The digest is a pure function of that
//! exact text: switching to a binary or fixed-width encoding would change
//! every output.

use core::fmt;

use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::keys::SharedSecret;
use super::params::ENTROPY_BYTES;
use crate::error::{validate, Result};

/// 32 bytes derived from a shared secret, handed to key-derivation consumers.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy([u8; ENTROPY_BYTES]);

impl Entropy {
    /// Wrap raw bytes, rejecting anything that is not exactly 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        validate::entropy_length(bytes.len(), ENTROPY_BYTES)?;
        let mut out = [0u8; ENTROPY_BYTES];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; ENTROPY_BYTES] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Entropy {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Entropy {}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Entropy(..)")
    }
}

/// Reduce a shared secret to its 32-byte entropy value.
pub fn derive_entropy(shared: &SharedSecret) -> Result<Entropy> {
    let mut hasher = Sha256::new();

    for &c in shared.as_coeffs() {
        let digits = Zeroizing::new(c.to_string());
        hasher.update(digits.as_bytes());
    }

    let digest = hasher.finalize();
    debug!(coefficients = shared.as_coeffs().len(), "derived entropy");
    Entropy::try_from_slice(digest.as_slice())
}

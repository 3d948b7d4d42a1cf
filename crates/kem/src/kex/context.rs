//! The validated exchange context and the three protocol operations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use nttkex_algorithms::{DefaultSamplers, Polynomial, PolyParams, UniformSampler};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::keys::{Ciphertext, PrivateKey, PublicKey, SharedSecret};
use super::params::{KexParams, NttKex1024Params};
use crate::error::{validate, Result};

/// Immutable configuration for one key exchange parameter set.
///
/// Construction validates `n` and `q` and precomputes the twiddle tables;
/// nothing can be sampled until a context exists, so invalid parameters are
/// always rejected before any key material is drawn. A context is never
/// mutated and may be shared between threads. Clones share the twiddle
/// tables.
///
/// # Security
///
/// The transform is an invertible linear map, and anyone holding a
/// ciphertext can invert it. There is no noise term. This is not a vetted
/// post-quantum key exchange.
#[derive(Debug, Clone)]
pub struct KexContext {
    params: Arc<PolyParams>,
    name: &'static str,
}

impl KexContext {
    /// Validate `n` and `q` and build a context for them.
    pub fn new(n: usize, q: u32) -> Result<Self> {
        Ok(Self {
            params: Arc::new(PolyParams::new(n, q)?),
            name: "NttKex",
        })
    }

    /// Context for the production parameter set.
    pub fn production() -> Result<Self> {
        Self::for_params::<NttKex1024Params>()
    }

    /// Context for a compile-time parameter set.
    pub fn for_params<P: KexParams>() -> Result<Self> {
        Ok(Self {
            params: Arc::new(PolyParams::new(P::N, P::Q)?),
            name: P::NAME,
        })
    }

    /// Context for `P`, built once per parameter set and then reused.
    ///
    /// Invalid sets are never cached and fail on every call.
    pub(crate) fn shared<P: KexParams>() -> Result<Self> {
        static CONTEXTS: OnceLock<Mutex<HashMap<(usize, u32, &'static str), KexContext>>> =
            OnceLock::new();

        let key = (P::N, P::Q, P::NAME);
        let cache = CONTEXTS.get_or_init(Default::default);
        if let Some(context) = cache.lock().ok().and_then(|map| map.get(&key).cloned()) {
            return Ok(context);
        }

        let context = Self::for_params::<P>()?;
        match cache.lock() {
            // Another caller may have filled the slot first; keep theirs
            Ok(mut map) => Ok(map.entry(key).or_insert(context).clone()),
            Err(_) => Ok(context),
        }
    }

    /// Ring parameters and twiddle tables.
    pub fn params(&self) -> &PolyParams {
        &self.params
    }

    /// Ring dimension `n`.
    pub fn n(&self) -> usize {
        self.params.n()
    }

    /// Coefficient modulus `q`.
    pub fn q(&self) -> u32 {
        self.params.q()
    }

    /// Name of the parameter set, used in errors and log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Generate a key pair: a uniform private key and its forward transform.
    pub fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(PublicKey, PrivateKey)> {
        let private_key = PrivateKey::new(DefaultSamplers::sample_uniform(&self.params, rng)?);
        let public_key = self.public_key(&private_key)?;

        debug!(algorithm = self.name, n = self.n(), q = self.q(), "generated key pair");
        Ok((public_key, private_key))
    }

    /// Derive the public key of `private_key` (its forward transform).
    pub fn public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        validate::key(private_key.as_poly().check(&self.params), "private")?;
        Ok(PublicKey::new(private_key.as_poly().forward(&self.params)?))
    }

    /// Encapsulate against `public_key` with fresh uniform randomness.
    ///
    /// Returns the ciphertext and the sender's shared secret.
    pub fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        self.check_public_key(public_key)?;
        let randomness = DefaultSamplers::sample_uniform(&self.params, rng)?;
        self.encapsulate_with_randomness(public_key, randomness)
    }

    /// Encapsulate with caller-chosen randomness `r`.
    ///
    /// The ciphertext is `forward(r)`; the shared secret is the pointwise
    /// product of the untransformed `r` with the public key. `r` is consumed
    /// and zeroized.
    pub fn encapsulate_with_randomness(
        &self,
        public_key: &PublicKey,
        randomness: Polynomial,
    ) -> Result<(Ciphertext, SharedSecret)> {
        self.check_public_key(public_key)?;
        let randomness = Zeroizing::new(randomness);
        validate::key(randomness.check(&self.params), "encapsulation randomness")?;

        let ciphertext = Ciphertext::new(randomness.forward(&self.params)?);
        let shared = randomness.pointwise_mul(public_key.as_poly(), &self.params)?;

        debug!(algorithm = self.name, n = self.n(), "encapsulated");
        Ok((ciphertext, SharedSecret::new(shared)))
    }

    /// Recover the shared secret from `ciphertext` with `private_key`.
    ///
    /// Works on owned copies only; neither input is modified. The backward
    /// transform of the ciphertext restores the sender's randomness exactly,
    /// which is then multiplied pointwise with the forward transform of the
    /// private key, reproducing the sender's value coefficient for
    /// coefficient.
    pub fn decapsulate(
        &self,
        ciphertext: &Ciphertext,
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        validate::ciphertext(ciphertext.as_poly().check(&self.params), self.name)?;
        validate::key(private_key.as_poly().check(&self.params), "private")?;

        let randomness = Zeroizing::new(ciphertext.as_poly().backward(&self.params)?);
        let public = private_key.as_poly().forward(&self.params)?;
        let shared = randomness.pointwise_mul(&public, &self.params)?;

        debug!(algorithm = self.name, n = self.n(), "decapsulated");
        Ok(SharedSecret::new(shared))
    }

    fn check_public_key(&self, public_key: &PublicKey) -> Result<()> {
        validate::key(public_key.as_poly().check(&self.params), "public")
    }
}

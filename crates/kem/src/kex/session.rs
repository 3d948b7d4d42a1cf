//! One complete exchange session.
//!
//! Key generation, encapsulation, decapsulation, the agreement check and
//! entropy derivation run as a single uninterrupted sequence. Any failure
//! ends the session with an error and no entropy.

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{info, instrument, warn};

use super::context::KexContext;
use super::entropy::{derive_entropy, Entropy};
use super::keys::{Ciphertext, PublicKey};
use crate::error::{validate, Result};

/// What a successful session hands downstream.
#[derive(Debug)]
pub struct ExchangeOutcome {
    /// The receiver's public key.
    pub public_key: PublicKey,
    /// The ciphertext the sender produced.
    pub ciphertext: Ciphertext,
    /// Entropy derived from the agreed shared secret.
    pub entropy: Entropy,
}

/// Run a full session with an existing context.
#[instrument(level = "debug", skip_all, fields(algorithm = context.name(), n = context.n(), q = context.q()))]
pub fn run<R: CryptoRng + RngCore>(context: &KexContext, rng: &mut R) -> Result<ExchangeOutcome> {
    let (public_key, private_key) = context.generate_keypair(rng)?;
    let (ciphertext, sender) = context.encapsulate(rng, &public_key)?;
    let receiver = context.decapsulate(&ciphertext, &private_key)?;

    let agreed: bool = sender.ct_eq(&receiver).into();
    if !agreed {
        warn!("sender and receiver shared secrets differ");
    }
    validate::agreement(agreed, context.name())?;

    let entropy = derive_entropy(&receiver)?;
    info!("exchange complete");

    Ok(ExchangeOutcome {
        public_key,
        ciphertext,
        entropy,
    })
}

/// Validate `n` and `q`, then run a full session.
///
/// Invalid parameters are reported before any randomness is drawn.
pub fn run_with_params<R: CryptoRng + RngCore>(
    n: usize,
    q: u32,
    rng: &mut R,
) -> Result<ExchangeOutcome> {
    let context = KexContext::new(n, q)?;
    run(&context, rng)
}

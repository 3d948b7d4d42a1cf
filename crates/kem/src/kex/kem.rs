//! `Kem` trait implementation over compile-time parameter sets.

use core::marker::PhantomData;

use nttkex_api::error::Result as ApiResult;
use nttkex_api::Kem as KemTrait;
use rand::{CryptoRng, RngCore};

use super::context::KexContext;
use super::keys::{Ciphertext, PrivateKey, PublicKey, SharedSecret};
use super::params::{KexParams, NttKex1024Params};

/// Static key exchange over the parameter set `P`.
///
/// The [`KexContext`] for `P` is validated and built on first use and shared
/// by later calls. An invalid parameter set fails every call before any
/// randomness is drawn.
pub struct NttKexKem<P: KexParams> {
    _params: PhantomData<P>,
}

/// Production key exchange.
pub type NttKex1024 = NttKexKem<NttKex1024Params>;

impl<P: KexParams> KemTrait for NttKexKem<P> {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SharedSecret = SharedSecret;
    type Ciphertext = Ciphertext;
    type KeyPair = (PublicKey, PrivateKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let context = KexContext::shared::<P>()?;
        Ok(context.generate_keypair(rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let context = KexContext::shared::<P>()?;
        Ok(context.encapsulate(rng, public_key)?)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let context = KexContext::shared::<P>()?;
        Ok(context.decapsulate(ciphertext, secret_key)?)
    }
}

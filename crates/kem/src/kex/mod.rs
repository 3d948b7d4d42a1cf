// kem/src/kex/mod.rs

//! Transform-based key exchange.
//!
//! A key pair is a uniform private polynomial and its forward transform. The
//! sender transforms fresh randomness into the ciphertext and multiplies the
//! untransformed randomness pointwise with the public key. The receiver
//! recovers the randomness with the backward transform and multiplies it with
//! the forward transform of its private key. Both sides land on the same
//! polynomial exactly; there is no noise and no reconciliation.

mod context;
mod entropy;
mod kem;
mod keys;
mod params;
pub mod session;

pub use self::context::KexContext;
pub use self::entropy::{derive_entropy, Entropy};
pub use self::kem::{NttKex1024, NttKexKem};
pub use self::keys::{Ciphertext, PrivateKey, PublicKey, SharedSecret};
pub use self::params::{KexParams, NttKex1024Params, ENTROPY_BYTES, NTT_KEX_N, NTT_KEX_Q};
pub use self::session::ExchangeOutcome;

//! # nttkex
//!
//! A transform-based key exchange: a butterfly-network transform over
//! fixed-length integer sequences modulo a prime, a key pair / encapsulate /
//! decapsulate protocol built on it, and SHA-256 entropy derivation from the
//! agreed shared value.
//!
//! ## Features
//!
//! - `kem` (default): the key exchange protocol and entropy derivation
//! - `rand` (default): re-export of the `rand` crate
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`nttkex-api`]: shared error type and the `Kem` trait
//! - [`nttkex-params`]: production constants
//! - [`nttkex-algorithms`]: modular arithmetic, polynomials, the transform
//! - [`nttkex-kem`]: the exchange protocol and entropy derivation
//!
//! ## Security
//!
//! The transform is linear and invertible and the exchange carries no noise:
//! anyone holding a ciphertext can recover the shared value. This crate is
//! not a vetted post-quantum key exchange.

pub use nttkex_algorithms as algorithms;
pub use nttkex_api as api;
pub use nttkex_params as params;

#[cfg(feature = "kem")]
pub use nttkex_kem as kem;

#[cfg(feature = "rand")]
pub use rand;

pub use zeroize;

/// Common imports for nttkex users
pub mod prelude {
    pub use crate::api::{Error, Kem, Result};

    pub use crate::algorithms::{
        ButterflyTransform, InverseTransformOperator, PolyParams, Polynomial, TransformOperator,
    };

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        derive_entropy, Ciphertext, Entropy, ExchangeOutcome, KexContext, NttKex1024, PrivateKey,
        PublicKey, SharedSecret,
    };

    pub use zeroize::{Zeroize, Zeroizing};
}

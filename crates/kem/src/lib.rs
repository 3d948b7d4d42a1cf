//! Transform-based key exchange
//!
//! This crate implements the key pair / encapsulate / decapsulate exchange
//! over the butterfly transform from `nttkex-algorithms`, and derivation of a
//! 32-byte entropy value from the agreed shared secret.

#![forbid(unsafe_code)]

pub mod error;
pub mod kex;

// Re-exports
pub use kex::session;
pub use kex::{
    derive_entropy, Ciphertext, Entropy, ExchangeOutcome, KexContext, NttKex1024, PrivateKey,
    PublicKey, SharedSecret,
};

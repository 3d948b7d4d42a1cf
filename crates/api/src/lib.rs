//! Public API traits and types for the nttkex library
//!
//! This crate provides the public API surface for the nttkex workspace: the
//! categorized error type shared by every layer and the [`Kem`] trait that
//! key exchange mechanisms implement.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::Kem;

// Re-export trait modules for direct access
pub use traits::kem;

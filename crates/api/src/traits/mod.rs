//! Trait definitions shared across the nttkex crates

pub mod kem;

pub use kem::Kem;

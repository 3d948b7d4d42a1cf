// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial engine
//!
//! Modular arithmetic, the validated parameter object, fixed-length
//! polynomials, the butterfly transform and uniform sampling. Everything here
//! takes the ring parameters explicitly; there is no global state.

pub mod arith;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{ButterflyTransform, InverseTransformOperator, TransformOperator};
    pub use super::params::PolyParams;
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{DefaultSamplers, UniformSampler};
}

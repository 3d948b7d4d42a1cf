//! Arithmetic and transform primitives for the nttkex key exchange
//!
//! This crate provides modular arithmetic over a prime, the validated ring
//! parameter object with its twiddle tables, fixed-length polynomials, the
//! forward/backward butterfly transform, and uniform sampling.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
pub use poly::{
    ntt::{ButterflyTransform, InverseTransformOperator, TransformOperator},
    params::PolyParams,
    polynomial::Polynomial,
    sampling::{DefaultSamplers, UniformSampler},
};

//! Constants for the transform-based key exchange

/// Production ring dimension (number of coefficients per polynomial)
pub const NTT_KEX_N: usize = 1024;

/// Production coefficient modulus (prime, greater than `NTT_KEX_N`)
pub const NTT_KEX_Q: u32 = 40961;

/// Size of the entropy value derived from a shared secret, in bytes
pub const ENTROPY_BYTES: usize = 32;

/// Structure describing one key exchange parameter set
pub struct NttKexParams {
    /// Ring dimension
    pub n: usize,

    /// Coefficient modulus
    pub q: u32,

    /// Size of the derived entropy in bytes
    pub entropy_size: usize,
}

/// Production parameter set
pub const NTT_KEX_1024: NttKexParams = NttKexParams {
    n: NTT_KEX_N,
    q: NTT_KEX_Q,
    entropy_size: ENTROPY_BYTES,
};

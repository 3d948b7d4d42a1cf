// kem/src/kex/params.rs

//! Key exchange parameter sets.

use nttkex_params::kex as global_params;

/// Production ring dimension.
pub const NTT_KEX_N: usize = global_params::NTT_KEX_N;
/// Production coefficient modulus.
pub const NTT_KEX_Q: u32 = global_params::NTT_KEX_Q;
/// Entropy size for every parameter set.
pub const ENTROPY_BYTES: usize = global_params::NTT_KEX_1024.entropy_size;

/// Trait defining a compile-time parameter set for the static [`Kem`] API.
///
/// The values are still validated at run time, before any randomness is
/// drawn, so an invalid set fails every operation with a parameter error.
///
/// [`Kem`]: nttkex_api::Kem
pub trait KexParams: Send + Sync + 'static {
    /// Ring dimension `n` (power of two).
    const N: usize;
    /// Coefficient modulus `q` (prime, greater than `n`).
    const Q: u32;
    /// Algorithm name string.
    const NAME: &'static str;
}

/// Production parameter set.
pub struct NttKex1024Params;
impl KexParams for NttKex1024Params {
    const N: usize = global_params::NTT_KEX_1024.n;
    const Q: u32 = global_params::NTT_KEX_1024.q;
    const NAME: &'static str = "NttKex-1024";
}

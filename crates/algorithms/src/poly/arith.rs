//! Modular arithmetic over a prime modulus
//!
//! Every helper returns a value in `[0, modulus)`. Intermediates are computed
//! in 64 bits, so no input below `2^32` can overflow.

/// Fold any signed integer into `[0, modulus)`.
///
/// Negative inputs wrap around (`normalize(-1, 17) == 16`), which is what
/// subtraction needs. The transform also uses this for index arithmetic
/// modulo `n`.
#[inline(always)]
pub fn normalize(x: i64, modulus: u32) -> u32 {
    x.rem_euclid(modulus as i64) as u32
}

/// Modular addition
#[inline(always)]
pub fn add(a: u32, b: u32, q: u32) -> u32 {
    ((a as u64 + b as u64) % q as u64) as u32
}

/// Modular subtraction
#[inline(always)]
pub fn sub(a: u32, b: u32, q: u32) -> u32 {
    normalize(a as i64 - b as i64, q)
}

/// Modular multiplication
#[inline(always)]
pub fn mul(a: u32, b: u32, q: u32) -> u32 {
    ((a as u64 * b as u64) % q as u64) as u32
}

/// Modular exponentiation by square-and-multiply.
#[inline]
pub fn pow_mod(mut base: u32, mut exp: u32, q: u32) -> u32 {
    let mut acc = 1 % q;
    base %= q;
    while exp != 0 {
        if (exp & 1) == 1 {
            acc = mul(acc, base, q);
        }
        base = mul(base, base, q);
        exp >>= 1;
    }
    acc
}

/// Multiplicative inverse modulo a prime `q` (Fermat's little theorem).
///
/// Only meaningful for `a` not divisible by `q`.
#[inline]
pub fn inv_mod(a: u32, q: u32) -> u32 {
    pow_mod(a, q.wrapping_sub(2), q)
}

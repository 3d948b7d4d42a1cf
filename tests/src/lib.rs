//! Shared fixtures for the nttkex integration and property tests

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use sha2::{Digest, Sha256};

/// Parameter sets every test sweeps over: `(n, q)`, each valid
pub const VALID_SETS: &[(usize, u32)] = &[
    (2, 3),
    (4, 17),
    (8, 17),
    (16, 257),
    (64, 257),
    (256, 7681),
    (1024, 40961),
];

/// Parameter sets that must be rejected: non power-of-two `n`, composite
/// `q`, or `q` not above `n`
pub const INVALID_SETS: &[(usize, u32)] = &[
    (0, 17),
    (6, 17),
    (12, 257),
    (4, 9),
    (4, 1),
    (4, 3),
    (4, 4),
    (16, 13),
];

/// Deterministic generator for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Decimal digits of each coefficient, concatenated without separators
pub fn decimal_transcript(coeffs: &[u32]) -> String {
    coeffs.iter().map(|c| c.to_string()).collect()
}

/// Expected entropy for `coeffs`, computed independently of the library
pub fn reference_entropy_hex(coeffs: &[u32]) -> String {
    hex::encode(Sha256::digest(decimal_transcript(coeffs).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_transcript() {
        assert_eq!(decimal_transcript(&[16, 5, 15, 14]), "1651514");
        assert_eq!(decimal_transcript(&[0, 0]), "00");
        assert_eq!(decimal_transcript(&[]), "");
    }

    #[test]
    fn test_reference_entropy_scenario() {
        assert_eq!(
            reference_entropy_hex(&[16, 5, 15, 14]),
            "f26a4ecd331c6e6559ba30fc4eb8ca0cd3378223b520c76162ad85214e830b35"
        );
    }
}

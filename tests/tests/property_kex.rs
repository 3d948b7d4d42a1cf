//! Property-based tests for the key exchange and entropy derivation

use nttkex_algorithms::Polynomial;
use nttkex_kem::{derive_entropy, KexContext, PrivateKey};
use nttkex_tests::{reference_entropy_hex, VALID_SETS};
use proptest::prelude::*;

/// A valid parameter set with a private key and encapsulation randomness
fn exchange_inputs() -> impl Strategy<Value = (usize, u32, Vec<u32>, Vec<u32>)> {
    prop::sample::select(VALID_SETS.to_vec()).prop_flat_map(|(n, q)| {
        (
            Just(n),
            Just(q),
            prop::collection::vec(0..q, n),
            prop::collection::vec(0..q, n),
        )
    })
}

proptest! {
    #[test]
    fn parties_agree((n, q, sk, r) in exchange_inputs()) {
        let context = KexContext::new(n, q).unwrap();
        let sk = PrivateKey::from_coeffs(&context, &sk).unwrap();
        let pk = context.public_key(&sk).unwrap();
        let r = Polynomial::from_coeffs(context.params(), &r).unwrap();

        let (ct, sender) = context.encapsulate_with_randomness(&pk, r).unwrap();
        let receiver = context.decapsulate(&ct, &sk).unwrap();
        prop_assert_eq!(sender.as_coeffs(), receiver.as_coeffs());
    }

    #[test]
    fn public_key_is_forward_transform((n, q, sk, _r) in exchange_inputs()) {
        let context = KexContext::new(n, q).unwrap();
        let private = PrivateKey::from_coeffs(&context, &sk).unwrap();
        let pk = context.public_key(&private).unwrap();

        let expected = Polynomial::from_coeffs(context.params(), &sk)
            .unwrap()
            .forward(context.params())
            .unwrap();
        prop_assert_eq!(pk.as_coeffs(), expected.as_coeffs_slice());
    }

    #[test]
    fn entropy_matches_reference((n, q, sk, r) in exchange_inputs()) {
        let context = KexContext::new(n, q).unwrap();
        let sk = PrivateKey::from_coeffs(&context, &sk).unwrap();
        let pk = context.public_key(&sk).unwrap();
        let r = Polynomial::from_coeffs(context.params(), &r).unwrap();
        let (_, shared) = context.encapsulate_with_randomness(&pk, r).unwrap();

        let first = derive_entropy(&shared).unwrap();
        let second = derive_entropy(&shared).unwrap();
        prop_assert_eq!(first.as_bytes().len(), 32);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_hex(), reference_entropy_hex(shared.as_coeffs()));
    }
}

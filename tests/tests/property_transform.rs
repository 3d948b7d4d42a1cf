//! Property-based tests for modular arithmetic and the butterfly transform

use nttkex_algorithms::poly::arith;
use nttkex_algorithms::{PolyParams, Polynomial};
use nttkex_tests::VALID_SETS;
use proptest::prelude::*;

/// A valid parameter set together with coefficients reduced into `[0, q)`
fn params_and_coeffs() -> impl Strategy<Value = (usize, u32, Vec<u32>)> {
    prop::sample::select(VALID_SETS.to_vec()).prop_flat_map(|(n, q)| {
        (
            Just(n),
            Just(q),
            prop::collection::vec(0..q, n),
        )
    })
}

/// Two coefficient vectors of the same valid shape
fn params_and_pair() -> impl Strategy<Value = (usize, u32, Vec<u32>, Vec<u32>)> {
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
    fn backward_inverts_forward((n, q, coeffs) in params_and_coeffs()) {
        let params = PolyParams::new(n, q).unwrap();
        let poly = Polynomial::from_coeffs(&params, &coeffs).unwrap();

        let restored = poly.forward(&params).unwrap().backward(&params).unwrap();
        prop_assert_eq!(restored.as_coeffs_slice(), &coeffs[..]);
    }

    #[test]
    fn forward_inverts_backward((n, q, coeffs) in params_and_coeffs()) {
        let params = PolyParams::new(n, q).unwrap();
        let poly = Polynomial::from_coeffs(&params, &coeffs).unwrap();

        let restored = poly.backward(&params).unwrap().forward(&params).unwrap();
        prop_assert_eq!(restored.as_coeffs_slice(), &coeffs[..]);
    }

    #[test]
    fn transform_output_stays_in_range((n, q, coeffs) in params_and_coeffs()) {
        let params = PolyParams::new(n, q).unwrap();
        let poly = Polynomial::from_coeffs(&params, &coeffs).unwrap();

        let forward = poly.forward(&params).unwrap();
        let backward = poly.backward(&params).unwrap();
        prop_assert!(forward.as_coeffs_slice().iter().all(|&c| c < q));
        prop_assert!(backward.as_coeffs_slice().iter().all(|&c| c < q));
        prop_assert_eq!(forward.len(), n);
    }

    #[test]
    fn forward_is_linear((n, q, a, b) in params_and_pair()) {
        let params = PolyParams::new(n, q).unwrap();
        let a = Polynomial::from_coeffs(&params, &a).unwrap();
        let b = Polynomial::from_coeffs(&params, &b).unwrap();

        let sum_then_transform = a.add(&b, &params).unwrap().forward(&params).unwrap();
        let transform_then_sum = a
            .forward(&params)
            .unwrap()
            .add(&b.forward(&params).unwrap(), &params)
            .unwrap();
        prop_assert_eq!(sum_then_transform, transform_then_sum);
    }

    #[test]
    fn arith_is_closed(q in prop::sample::select(vec![3u32, 17, 257, 7681, 40961, 4294967291]),
                       a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (a % q, b % q);
        prop_assert!(arith::add(a, b, q) < q);
        prop_assert!(arith::sub(a, b, q) < q);
        prop_assert!(arith::mul(a, b, q) < q);
        prop_assert_eq!(arith::add(arith::sub(a, b, q), b, q), a);
    }

    #[test]
    fn inverse_is_inverse(q in prop::sample::select(vec![17u32, 257, 40961]), a in 1u32..17) {
        let inv = arith::inv_mod(a, q);
        prop_assert_eq!(arith::mul(a, inv, q), 1);
    }

    #[test]
    fn normalize_lands_in_range(x in any::<i64>(), q in 2u32..u32::MAX) {
        let r = arith::normalize(x, q);
        prop_assert!(r < q);
        prop_assert_eq!((x as i128 - r as i128).rem_euclid(q as i128), 0);
    }
}

//! Integration tests for the key exchange through the facade crate

use nttkex::kem::session;
use nttkex::prelude::*;
use nttkex_tests::{reference_entropy_hex, seeded_rng, INVALID_SETS, VALID_SETS};

#[test]
fn test_kem_trait_exchange() {
    let mut rng = seeded_rng(1);

    let (public_key, secret_key) = NttKex1024::keypair(&mut rng).unwrap();
    let (ciphertext, shared_secret_sender) =
        NttKex1024::encapsulate(&mut rng, &public_key).unwrap();
    let shared_secret_recipient = NttKex1024::decapsulate(&secret_key, &ciphertext).unwrap();

    assert_eq!(
        shared_secret_sender.as_ref(),
        shared_secret_recipient.as_ref()
    );
}

#[test]
fn test_agreement_across_parameter_sets() {
    let mut rng = seeded_rng(2);

    for &(n, q) in VALID_SETS {
        let context = KexContext::new(n, q).unwrap();
        for _ in 0..8 {
            let (pk, sk) = context.generate_keypair(&mut rng).unwrap();
            let (ct, ss1) = context.encapsulate(&mut rng, &pk).unwrap();
            let ss2 = context.decapsulate(&ct, &sk).unwrap();
            assert_eq!(ss1, ss2, "n = {}, q = {}", n, q);
        }
    }
}

#[test]
fn test_invalid_sets_rejected_everywhere() {
    let mut rng = seeded_rng(3);

    for &(n, q) in INVALID_SETS {
        assert!(PolyParams::new(n, q).is_err(), "n = {}, q = {}", n, q);

        let err = KexContext::new(n, q).unwrap_err();
        assert!(err.is_parameter_invalid());

        let err = session::run_with_params(n, q, &mut rng).unwrap_err();
        let core: Error = err.into();
        assert!(core.is_parameter_invalid(), "n = {}, q = {}: {}", n, q, core);
    }
}

#[test]
fn test_session_entropy_matches_reference() {
    let mut rng = seeded_rng(4);
    let context = KexContext::new(8, 17).unwrap();

    // Rebuild the session by hand with the same seed to see the shared value
    let outcome = session::run(&context, &mut seeded_rng(4)).unwrap();
    let (pk, sk) = context.generate_keypair(&mut rng).unwrap();
    let (ct, ss) = context.encapsulate(&mut rng, &pk).unwrap();

    assert_eq!(outcome.public_key, pk);
    assert_eq!(outcome.ciphertext, ct);
    assert_eq!(
        context.decapsulate(&ct, &sk).unwrap().as_coeffs(),
        ss.as_coeffs()
    );
    assert_eq!(outcome.entropy.to_hex(), reference_entropy_hex(ss.as_coeffs()));
}

#[test]
fn test_scenario_through_facade() {
    let context = KexContext::new(4, 17).unwrap();
    let sk = PrivateKey::from_coeffs(&context, &[1, 2, 3, 4]).unwrap();
    let pk = context.public_key(&sk).unwrap();
    assert_eq!(pk.as_coeffs(), &[10, 15, 7, 6]);

    let ct = Ciphertext::from_coeffs(&context, &[9, 15, 7, 6]).unwrap();
    let ss = context.decapsulate(&ct, &sk).unwrap();
    assert_eq!(ss.as_coeffs(), &[16, 5, 15, 14]);

    let entropy = derive_entropy(&ss).unwrap();
    assert_eq!(entropy.to_hex(), reference_entropy_hex(&[16, 5, 15, 14]));
}

#[test]
fn test_contexts_are_shareable_across_threads() {
    let context = std::sync::Arc::new(KexContext::new(64, 257).unwrap());

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let context = std::sync::Arc::clone(&context);
            std::thread::spawn(move || {
                let mut rng = seeded_rng(100 + seed);
                session::run(&context, &mut rng).map(|outcome| outcome.entropy)
            })
        })
        .collect();

    let mut seen = Vec::new();
    for handle in handles {
        let entropy = handle.join().unwrap().unwrap();
        assert!(!seen.contains(&entropy));
        seen.push(entropy);
    }
}

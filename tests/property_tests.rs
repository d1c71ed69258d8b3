mod common;

use chaum_pedersen_modp::primitives::rng::random_below;
use chaum_pedersen_modp::{GroupParameters, Prover, SecureRng, Transcript, Verifier};
use num_bigint::BigUint;
use proptest::prelude::*;

proptest! {
    #[test]
    fn toy_completeness(x in 0u32..11, k in 0u32..11, c in 0u32..11) {
        let params = GroupParameters::toy();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params);

        let (x, k, c) = (BigUint::from(x), BigUint::from(k), BigUint::from(c));
        let y = prover.compute_pair(&x);
        let r = prover.compute_pair(&k);
        let s = prover.solve(&k, &c, &x).unwrap();

        prop_assert!(verifier.verify(r.p1(), r.p2(), y.p1(), y.p2(), &c, &s));
    }

    #[test]
    fn toy_soundness_for_nonzero_challenge(
        x in 0u32..11,
        wrong in 0u32..11,
        k in 0u32..11,
        c in 1u32..11,
    ) {
        prop_assume!(x != wrong);

        let params = GroupParameters::toy();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params);

        let (x, wrong, k, c) = (
            BigUint::from(x),
            BigUint::from(wrong),
            BigUint::from(k),
            BigUint::from(c),
        );
        let y = prover.compute_pair(&x);
        let r = prover.compute_pair(&k);
        let forged = prover.solve(&k, &c, &wrong).unwrap();

        prop_assert!(!verifier.verify(r.p1(), r.p2(), y.p1(), y.p2(), &c, &forged));
    }

    #[test]
    fn solve_is_reduced_for_any_secret(k in 0u64..11, c in 0u64..11, x in any::<u64>()) {
        let prover = Prover::new(GroupParameters::toy());
        let s = prover
            .solve(&BigUint::from(k), &BigUint::from(c), &BigUint::from(x))
            .unwrap();

        prop_assert!(s < BigUint::from(11u32));
        let expected = ((k as i128 - (c as i128) * (x as i128)).rem_euclid(11)) as u32;
        prop_assert_eq!(s, BigUint::from(expected));
    }

    #[test]
    fn compute_pair_is_deterministic(e in any::<u64>()) {
        let prover = Prover::new(GroupParameters::toy());
        let e = BigUint::from(e);
        prop_assert_eq!(prover.compute_pair(&e), prover.compute_pair(&e));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn modp_completeness(_seed in any::<u64>()) {
        let params = common::modp_params();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params.clone());
        let mut rng = SecureRng::new();

        let x = random_below(&mut rng, params.q());
        let statement = prover.compute_pair(&x);

        let proof = prover.prove(&mut rng, &x, &mut Transcript::new()).unwrap();
        prop_assert!(params.is_scalar(proof.s()));
        prop_assert!(verifier.verify_proof(&statement, &proof, &mut Transcript::new()));
    }

    #[test]
    fn modp_wrong_secret_fails(_seed in any::<u64>()) {
        let params = common::modp_params();
        let prover = Prover::new(params.clone());
        let verifier = Verifier::new(params.clone());
        let mut rng = SecureRng::new();

        let x = random_below(&mut rng, params.q());
        let wrong = random_below(&mut rng, params.q());
        prop_assume!(x != wrong);

        let y = prover.compute_pair(&x);
        let (r, nonce) = prover.commit(&mut rng);
        let c = verifier.challenge(&mut rng);
        prop_assume!(c != BigUint::from(0u32));
        let forged = prover.respond(nonce, &c, &wrong).unwrap();

        prop_assert!(!verifier.verify(r.p1(), r.p2(), y.p1(), y.p2(), &c, &forged));
    }
}

//! Property-based invariants over arbitrary inputs.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use bayes_rope::analysis::{
    count_regions, reduce_posterior, sign_test_concentration, sign_test_samples,
    signed_rank_samples, SignedRankKernels,
};
use bayes_rope::{Observations, Region};

fn region() -> impl Strategy<Value = Region> {
    prop_oneof![Just(Region::Left), Just(Region::Rope), Just(Region::Right)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn counts_partition_observations(
        x in prop::collection::vec(-1.0f64..1.0, 1..50),
        rope in 0.0f64..0.5,
    ) {
        let c = count_regions(&x, rope);
        prop_assert_eq!(c.left + c.rope + c.right, x.len());
    }

    #[test]
    fn concentration_total(
        x in prop::collection::vec(-1.0f64..1.0, 1..50),
        rope in 0.0f64..0.5,
        strength in 0.0f64..10.0,
        place in region(),
    ) {
        let alpha = sign_test_concentration(&x, rope, strength, place).unwrap();
        let expected = x.len() as f64 + 3.0 * 1e-4 + strength;
        prop_assert!((alpha.iter().sum::<f64>() - expected).abs() < 1e-9);
        prop_assert!(alpha.iter().all(|&a| a >= 1e-4));
    }

    #[test]
    fn sign_test_posterior_sums_to_one(
        x in prop::collection::vec(-1.0f64..1.0, 1..30),
        rope in 0.0f64..0.5,
        strength in 0.0f64..5.0,
        place in region(),
        seed in any::<u64>(),
    ) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let samples = sign_test_samples(&x, rope, strength, place, 200, &mut rng).unwrap();
        for row in samples.rows() {
            prop_assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
        let p = reduce_posterior(&samples).unwrap();
        prop_assert!((p.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn signed_rank_posterior_sums_to_one(
        x in prop::collection::vec(-1.0f64..1.0, 1..20),
        rope in 0.0f64..0.5,
        strength in 0.0f64..5.0,
        place in region(),
        seed in any::<u64>(),
    ) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let samples = signed_rank_samples(&x, rope, strength, place, 100, &mut rng).unwrap();
        for row in samples.rows() {
            prop_assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            prop_assert!(row[0] >= 0.0 && row[2] >= 0.0);
        }
        let p = reduce_posterior(&samples).unwrap();
        prop_assert!((p.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn kernels_are_three_valued_and_symmetric(
        x in prop::collection::vec(-1.0f64..1.0, 1..15),
        rope in 0.0f64..0.5,
        place in region(),
    ) {
        let k = SignedRankKernels::build(&x, rope, place).unwrap();
        prop_assert_eq!(k.size(), x.len() + 1);
        for m in [k.right(), k.left()] {
            prop_assert_eq!(m, &m.transpose());
            prop_assert!(m.iter().all(|&v| v == 0.0 || v == 0.5 || v == 1.0));
        }
    }

    #[test]
    fn pairs_match_differences(
        pairs in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 1..30),
    ) {
        let rows: Vec<[f64; 2]> = pairs.iter().map(|&(a, b)| [a, b]).collect();
        let diffs = Observations::from(rows).differences().unwrap();
        for (d, (a, b)) in diffs.iter().zip(pairs.iter()) {
            prop_assert_eq!(*d, b - a);
        }
    }
}

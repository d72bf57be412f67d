//! Statistical properties of the posterior probabilities.
//!
//! Every run is seeded; thresholds leave several Monte Carlo standard errors
//! of slack.

use bayes_rope::{Probabilities, Region, RopeComparison};

const SCORES: [f64; 10] = [0.03, -0.01, 0.02, 0.05, -0.02, 0.04, 0.01, 0.06, -0.03, 0.02];

fn negated(x: &[f64]) -> Vec<f64> {
    x.iter().map(|v| -v).collect()
}

fn assert_close(a: &Probabilities, b: &Probabilities, tol: f64) {
    for (x, y) in a.as_array().iter().zip(b.as_array().iter()) {
        assert!((x - y).abs() < tol, "{a:?} vs {b:?}");
    }
}

/// Unanimous differences above a zero rope with no prior mass.
#[test]
fn unanimous_right_converges() {
    let x = [1.0; 10];
    let p = RopeComparison::sign_test(0.0)
        .prior_strength(0.0)
        .samples(100_000)
        .seed(42)
        .run(&x)
        .unwrap();
    assert!(p.right > 0.95, "p_right = {}", p.right);

    let p = RopeComparison::signed_rank(0.0)
        .prior_strength(0.0)
        .samples(10_000)
        .seed(42)
        .run(&x)
        .unwrap();
    assert!(p.right > 0.95, "p_right = {}", p.right);
}

/// Widening the rope never lowers the expected P(rope).
#[test]
fn rope_width_is_monotone() {
    const SEEDS: [u64; 4] = [17, 18, 19, 20];
    let ropes = [0.0, 0.01, 0.03, 0.1];
    for cmp in [
        RopeComparison::sign_test(0.0).samples(20_000),
        RopeComparison::signed_rank(0.0).samples(5_000),
    ] {
        let mut previous = 0.0;
        for &rope in &ropes {
            let mean_rope = SEEDS
                .iter()
                .map(|&seed| cmp.clone().rope(rope).seed(seed).run(&SCORES).unwrap().rope)
                .sum::<f64>()
                / SEEDS.len() as f64;
            assert!(
                mean_rope + 0.01 >= previous,
                "{:?}: mean p_rope fell from {previous} to {mean_rope} at rope {rope}",
                cmp.config().model
            );
            previous = mean_rope;
        }
        assert!(previous > 0.99);
    }
}

/// Negating the differences swaps left and right.
#[test]
fn negation_mirrors_probabilities() {
    let x = SCORES;
    let neg = negated(&x);

    let a = RopeComparison::sign_test(0.01)
        .names("A", "B")
        .seed(1)
        .run(&x)
        .unwrap();
    let b = RopeComparison::sign_test(0.01)
        .names("B", "A")
        .seed(2)
        .run(neg.clone())
        .unwrap();
    assert_close(&a, &b.mirrored(), 0.02);

    let a = RopeComparison::signed_rank(0.01)
        .samples(20_000)
        .seed(1)
        .run(&x)
        .unwrap();
    let b = RopeComparison::signed_rank(0.01)
        .samples(20_000)
        .seed(2)
        .run(neg)
        .unwrap();
    assert_close(&a, &b.mirrored(), 0.03);
}

/// Mirrored prior placement mirrors the probabilities exactly in distribution.
#[test]
fn prior_placement_mirrors() {
    let x = [0.0, 0.01, -0.01];
    let left = RopeComparison::sign_test(0.005)
        .prior_strength(2.0)
        .prior_place(Region::Left)
        .seed(4)
        .run(&x)
        .unwrap();
    let right = RopeComparison::sign_test(0.005)
        .prior_strength(2.0)
        .prior_place(Region::Right)
        .seed(5)
        .run(&x)
        .unwrap();
    assert_close(&left, &right.mirrored(), 0.02);
    assert!(left.left > left.right);
}

/// Reduced probabilities always partition the samples.
#[test]
fn probabilities_sum_to_one() {
    for (i, rope) in [0.0, 0.005, 0.02, 1.0].into_iter().enumerate() {
        for cmp in [RopeComparison::sign_test(rope), RopeComparison::signed_rank(rope)] {
            let p = cmp.samples(777).seed(i as u64).run(&SCORES).unwrap();
            assert!((p.total() - 1.0).abs() < 1e-9);
        }
    }
}

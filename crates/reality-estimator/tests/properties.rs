//! Randomized checks over the control domains
//!
//! Each test draws criteria from the ranges the controls allow (plus some
//! values outside them) and checks invariants that must hold for every input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reality_estimator::{
    BodyType, Criteria, Education, MaritalStatus, PERCENTAGE_FLOOR, ReferenceDataset, Religion,
    SmokingStatus, SweepAxis, estimate, estimate_breakdown, sweep,
};

const ITERATIONS: usize = 2_000;

fn pick<'a>(rng: &mut StdRng, codes: &[&'a str]) -> &'a str {
    codes[rng.gen_range(0..codes.len())]
}

/// Known codes plus one the tables do not list
fn with_unknown(codes: &[&'static str]) -> Vec<&'static str> {
    codes.iter().copied().chain(["unknown"]).collect()
}

fn random_criteria(rng: &mut StdRng) -> Criteria {
    Criteria {
        min_age: rng.gen_range(10..=75),
        max_age: rng.gen_range(10..=75),
        min_height: rng.gen_range(140..=210),
        max_height: rng.gen_range(140..=210),
        religion: Religion::from(pick(rng, &with_unknown(Religion::CODES))),
        min_salary: rng.gen_range(0..=9000),
        body_type: BodyType::from(pick(rng, BodyType::CODES)),
        education: Education::from(pick(rng, &with_unknown(Education::CODES))),
        smoking_status: SmokingStatus::from(pick(rng, SmokingStatus::CODES)),
        marital_status: MaritalStatus::from(pick(rng, MaritalStatus::CODES)),
    }
}

#[test]
fn test_floor_and_count_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let data = ReferenceDataset::cyprus();

    for _ in 0..ITERATIONS {
        let criteria = random_criteria(&mut rng);
        let result = estimate(&criteria, data);

        assert!(result.percentage >= PERCENTAGE_FLOOR, "{:?}", criteria);
        assert_eq!(
            result.count,
            ((result.percentage / 100.0) * data.total_population as f64).round() as u64
        );
        assert_eq!(result.criteria, criteria);
    }
}

#[test]
fn test_estimate_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let data = ReferenceDataset::cyprus();

    for _ in 0..ITERATIONS {
        let criteria = random_criteria(&mut rng);
        let first = estimate(&criteria, data);
        let second = estimate(&criteria, data);

        assert_eq!(first.percentage.to_bits(), second.percentage.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn test_estimate_equals_floored_breakdown() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = ReferenceDataset::cyprus();

    for _ in 0..ITERATIONS {
        let criteria = random_criteria(&mut rng);
        let breakdown = estimate_breakdown(&criteria, data);
        let result = estimate(&criteria, data);

        assert_eq!(
            result.percentage.to_bits(),
            breakdown.raw_percentage().max(PERCENTAGE_FLOOR).to_bits()
        );
    }
}

#[test]
fn test_any_never_exceeds_unfiltered_product() {
    let mut rng = StdRng::seed_from_u64(99);
    let data = ReferenceDataset::cyprus();

    for _ in 0..ITERATIONS {
        let criteria = random_criteria(&mut rng);
        let unfiltered = Criteria {
            religion: Religion::Any,
            body_type: BodyType::Any,
            education: Education::Any,
            smoking_status: SmokingStatus::Any,
            marital_status: MaritalStatus::Any,
            ..criteria.clone()
        };

        let filtered = estimate(&criteria, data).percentage;
        let base = estimate(&unfiltered, data).percentage;
        assert!(filtered <= base, "{:?}", criteria);
    }
}

#[test]
fn test_snapshot_survives_caller_mutation() {
    let mut criteria = Criteria::default();
    let result = estimate(&criteria, ReferenceDataset::cyprus());

    criteria.min_age = 50;
    criteria.religion = Religion::Muslim;

    assert_eq!(result.criteria, Criteria::default());
}

#[test]
fn test_sweep_matches_direct_estimates() {
    let data = ReferenceDataset::cyprus();
    let base = Criteria::default();

    for axis in SweepAxis::ALL {
        let points = sweep(&base, axis, data);
        assert_eq!(points.len(), axis.positions().len());

        for point in points {
            let direct = estimate(&axis.apply(&base, point.value), data);
            assert_eq!(point.percentage.to_bits(), direct.percentage.to_bits());
            assert_eq!(point.count, direct.count);
        }
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let data = ReferenceDataset::cyprus();
    let criteria = Criteria::default();
    let expected = estimate(&criteria, data);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| estimate(&criteria, data)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

//! Structural properties of the group index and the chaos measures.

use ndarray::Array1;
use proptest::prelude::*;
use skrough_rust::*;

mod common;

const MEASURES: [ChaosMeasure; 3] = [
    ChaosMeasure::Entropy,
    ChaosMeasure::GiniImpurity,
    ChaosMeasure::ConflictsCount,
];

fn decisions(num_objects: usize, seed: u64) -> Array1<Code> {
    common::random_codes(num_objects, 1, 3, seed).column(0).to_owned()
}

proptest! {
    #[test]
    fn adding_an_attribute_never_increases_chaos(
        seed in any::<u64>(),
        num_objects in 1usize..60,
        prefix in proptest::collection::vec(0usize..5, 0..4),
        extra in 0usize..5,
    ) {
        let x = common::random_codes(num_objects, 5, 3, seed);
        let y = decisions(num_objects, seed.wrapping_add(1));
        let counts = [3; 5];
        let mut with_extra = prefix.clone();
        with_extra.push(extra);
        let before = GroupIndex::create_from_data(x.view(), &counts, &prefix).unwrap();
        let after = GroupIndex::create_from_data(x.view(), &counts, &with_extra).unwrap();
        for measure in MEASURES {
            let chaos_fn = measure.function();
            let old = before.get_chaos_score(y.view(), 3, chaos_fn).unwrap();
            let new = after.get_chaos_score(y.view(), 3, chaos_fn).unwrap();
            prop_assert!(new <= old + 1e-12, "{}: {} > {}", measure, new, old);
        }
    }

    #[test]
    fn compression_is_idempotent(raw in proptest::collection::vec(0usize..1000, 0..80)) {
        let once = GroupIndex::create_from_index(raw.clone(), false).unwrap().compress();
        let twice = once.compress();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.partition_eq(&GroupIndex::create_from_index(raw, false).unwrap()));
    }

    #[test]
    fn sequential_splits_match_create_from_data(
        seed in any::<u64>(),
        num_objects in 0usize..50,
        a in 0usize..4,
        b in 0usize..4,
    ) {
        let x = common::random_codes(num_objects, 4, 4, seed);
        let counts = [4; 4];
        let sequential = GroupIndex::create_uniform(num_objects)
            .split(x.column(a), 4, false).unwrap()
            .split(x.column(b), 4, false).unwrap();
        let direct = GroupIndex::create_from_data(x.view(), &counts, &[a, b]).unwrap();
        prop_assert!(sequential.partition_eq(&direct));
        prop_assert_eq!(sequential.compress(), direct);
    }

    #[test]
    fn distribution_sums_to_object_count(
        seed in any::<u64>(),
        num_objects in 0usize..70,
        attrs in proptest::collection::vec(0usize..3, 0..3),
    ) {
        let x = common::random_codes(num_objects, 3, 5, seed);
        let y = decisions(num_objects, seed ^ 0x5eed);
        let gi = GroupIndex::create_from_data(x.view(), &[5; 3], &attrs).unwrap();
        let distribution = gi.get_distribution(y.view(), 3).unwrap();
        prop_assert_eq!(distribution.sum() as usize, num_objects);
        prop_assert_eq!(distribution.nrows(), gi.count());
    }

    #[test]
    fn score_after_split_equals_split_then_score(
        seed in any::<u64>(),
        num_objects in 1usize..60,
        base in 0usize..3,
        attr in 0usize..3,
    ) {
        let x = common::random_codes(num_objects, 3, 3, seed);
        let y = decisions(num_objects, seed.rotate_left(7));
        let gi = GroupIndex::create_from_data(x.view(), &[3; 3], &[base]).unwrap();
        for measure in MEASURES {
            let chaos_fn = measure.function();
            let split = gi.split(x.column(attr), 3, true).unwrap();
            let expected = split.get_chaos_score(y.view(), 3, chaos_fn).unwrap();
            let actual = gi
                .get_chaos_score_after_split(x.column(attr), 3, y.view(), 3, chaos_fn)
                .unwrap();
            prop_assert_eq!(expected, actual);
        }
    }
}

#[test]
fn test_known_measure_values() {
    use ndarray::array;
    approx::assert_abs_diff_eq!(gini_impurity(&array![[4, 3, 3]], 10), 0.66, epsilon = 1e-12);
    assert_eq!(entropy(&array![[1, 1]], 2), 1.0);
    assert_eq!(conflicts_count(&array![[2, 0], [0, 2]], 4), 0.0);
}

#[test]
fn test_length_mismatch_is_reported() {
    let gi = GroupIndex::create_uniform(4);
    let short = Array1::<Code>::zeros(3);
    let err = gi.get_distribution(short.view(), 1).unwrap_err();
    assert!(err.to_string().to_lowercase().contains("length mismatch"));
    assert!(gi.split(short.view(), 1, true).is_err());
}

#[test]
fn test_golf_partition() {
    let data = common::golf_dataset();
    let gi = GroupIndex::create_from_data(data.x(), data.x_counts(), &[0]).unwrap();
    assert_eq!(gi.count(), 3);
    assert_eq!(gi.groups()[1], vec![2, 6, 11, 12]);
    // overcast always plays
    let overcast = gi
        .get_chaos_score_for_objects(&[2, 6, 11, 12], data.y(), data.y_count(), entropy)
        .unwrap();
    assert_eq!(overcast, 0.0);
}

//! Permutation test deciding whether an attribute beats its shuffled copies.

use ndarray::ArrayView1;

use crate::core::error::{Result, RoughSetError};
use crate::core::types::Code;
use crate::core::utils::Random;
use crate::measures::ChaosFn;
use crate::partition::GroupIndex;

/// One-sided permutation significance test for a candidate attribute.
///
/// The real split score is compared against `probes_count` splits by randomly
/// permuted copies of `attr_values`. The smoothed share of probes scoring
/// strictly worse than the real attribute,
/// `(better + smoothing) / (probes + 2 * smoothing)`, must reach
/// `1 - allowed_randomness`.
///
/// All shuffles consume `rng`, so the outcome is fixed by its state.
#[allow(clippy::too_many_arguments)]
pub fn check_if_attr_better_than_shuffled(
    group_index: &GroupIndex,
    attr_values: ArrayView1<'_, Code>,
    attr_values_count: usize,
    values: ArrayView1<'_, Code>,
    values_count: usize,
    probes_count: usize,
    allowed_randomness: f64,
    chaos_fn: ChaosFn,
    rng: &mut Random,
    smoothing_parameter: f64,
) -> Result<bool> {
    let denominator = probes_count as f64 + 2.0 * smoothing_parameter;
    if !(denominator > 0.0) || !smoothing_parameter.is_finite() {
        return Err(RoughSetError::invalid_parameter(
            "daar_smoothing_parameter",
            smoothing_parameter.to_string(),
            "probe score denominator must be positive",
        ));
    }

    let attr_chaos_score = group_index.get_chaos_score_after_split(
        attr_values,
        attr_values_count,
        values,
        values_count,
        chaos_fn,
    )?;

    let mut shuffled = attr_values.to_vec();
    let mut attr_is_better_count = 0usize;
    for _ in 0..probes_count {
        rng.shuffle(&mut shuffled);
        let shuffled_chaos_score = group_index.get_chaos_score_after_split(
            ArrayView1::from(&shuffled[..]),
            attr_values_count,
            values,
            values_count,
            chaos_fn,
        )?;
        if shuffled_chaos_score > attr_chaos_score {
            attr_is_better_count += 1;
        }
    }

    let attr_probe_score = (attr_is_better_count as f64 + smoothing_parameter) / denominator;
    log::trace!(
        "Randomization check: score {:.6}, better in {}/{} probes, probe score {:.4}",
        attr_chaos_score,
        attr_is_better_count,
        probes_count,
        attr_probe_score
    );
    Ok(attr_probe_score >= 1.0 - allowed_randomness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::{entropy, gini_impurity};
    use ndarray::Array1;

    fn alternating(n: usize) -> Array1<Code> {
        (0..n).map(|i| i % 2).collect()
    }

    #[test]
    fn test_zero_probes_scores_one_half() {
        let values = alternating(10);
        let gi = GroupIndex::create_uniform(values.len());
        let mut rng = Random::with_seed(1);
        let check = |allowed, rng: &mut Random| {
            check_if_attr_better_than_shuffled(
                &gi, values.view(), 2, values.view(), 2, 0, allowed, entropy, rng, 1.0,
            )
            .unwrap()
        };
        assert!(check(0.5, &mut rng));
        assert!(!check(0.49, &mut rng));
    }

    #[test]
    fn test_perfect_predictor_passes() {
        let values = alternating(200);
        let gi = GroupIndex::create_uniform(values.len());
        let mut rng = Random::with_seed(7);
        assert!(check_if_attr_better_than_shuffled(
            &gi, values.view(), 2, values.view(), 2, 100, 0.05, entropy, &mut rng, 1.0,
        )
        .unwrap());
    }

    #[test]
    fn test_constant_attribute_fails() {
        let values = alternating(200);
        let constant = Array1::<Code>::zeros(200);
        let gi = GroupIndex::create_uniform(values.len());
        let mut rng = Random::with_seed(7);
        assert!(!check_if_attr_better_than_shuffled(
            &gi, constant.view(), 1, values.view(), 2, 100, 0.99, gini_impurity, &mut rng, 1.0,
        )
        .unwrap());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        // weakly informative attribute: agrees with the decision on 60% of objects
        let values = alternating(50);
        let attr: Array1<Code> = (0..50).map(|i| if i % 5 < 3 { i % 2 } else { 1 - i % 2 }).collect();
        let gi = GroupIndex::create_uniform(values.len());
        let run = |seed| {
            let mut rng = Random::with_seed(seed);
            let passed = check_if_attr_better_than_shuffled(
                &gi, attr.view(), 2, values.view(), 2, 40, 0.3, entropy, &mut rng, 1.0,
            )
            .unwrap();
            (passed, rng.next_u64())
        };
        for seed in 0..16 {
            assert_eq!(run(seed), run(seed), "seed {}", seed);
        }
    }

    #[test]
    fn test_invalid_smoothing() {
        let values = alternating(4);
        let gi = GroupIndex::create_uniform(4);
        let mut rng = Random::with_seed(0);
        assert!(check_if_attr_better_than_shuffled(
            &gi, values.view(), 2, values.view(), 2, 0, 0.1, entropy, &mut rng, 0.0,
        )
        .is_err());
    }
}

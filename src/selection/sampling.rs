//! Candidate sampling and ranking.

use crate::core::types::Elements;
use crate::core::utils::Random;

/// Draw at most `max_count` of `elements` without replacement, in random order.
///
/// `None` keeps every element in its original order.
pub fn sample_candidates(elements: &[usize], max_count: Option<usize>, rng: &mut Random) -> Elements {
    match max_count {
        None => elements.to_vec(),
        Some(max_count) => rng
            .sample(elements.len(), max_count)
            .into_iter()
            .map(|i| elements[i])
            .collect(),
    }
}

/// Reorder `elements` by ascending score; equal scores keep their input order.
pub fn stable_order_by_score(elements: &[usize], scores: &[f64]) -> Elements {
    let mut ranked: Vec<(usize, f64)> = elements.iter().copied().zip(scores.iter().copied()).collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(element, _)| element).collect()
}

//! Disorder (chaos) measures over group-by-decision count distributions.
//!
//! Every measure takes a `distribution[group][decision]` count matrix and the
//! number of objects it was built from. Counts are accumulated as integers and
//! only converted to floats for the final per-group terms.

use ndarray::{Array2, ArrayView1};

/// Signature shared by all chaos measures.
pub type ChaosFn = fn(&Array2<u64>, usize) -> f64;

fn group_totals(row: ArrayView1<'_, u64>) -> (u64, u64) {
    row.iter()
        .fold((0u64, 0u64), |(sum, sum_sq), &c| (sum + c, sum_sq + c * c))
}

/// Weighted Shannon entropy of the decision inside each group, in bits.
///
/// ```
/// use ndarray::array;
/// use skrough_rust::measures::entropy;
///
/// assert_eq!(entropy(&array![[1, 1]], 2), 1.0);
/// assert_eq!(entropy(&array![[3, 0], [0, 2]], 5), 0.0);
/// ```
pub fn entropy(distribution: &Array2<u64>, n_elements: usize) -> f64 {
    if n_elements == 0 {
        return 0.0;
    }
    let mut result = 0.0;
    for row in distribution.rows() {
        let (group_size, _) = group_totals(row);
        if group_size == 0 {
            continue;
        }
        let group_size = group_size as f64;
        let mut group_entropy = 0.0;
        for &count in row.iter() {
            if count > 0 {
                let p = count as f64 / group_size;
                group_entropy -= p * p.log2();
            }
        }
        result += group_size / n_elements as f64 * group_entropy;
    }
    result
}

/// Weighted Gini impurity of the decision inside each group.
pub fn gini_impurity(distribution: &Array2<u64>, n_elements: usize) -> f64 {
    if n_elements == 0 {
        return 0.0;
    }
    let mut result = 0.0;
    for row in distribution.rows() {
        let (group_size, sum_sq) = group_totals(row);
        if group_size == 0 {
            continue;
        }
        let impurity = 1.0 - sum_sq as f64 / (group_size * group_size) as f64;
        result += group_size as f64 / n_elements as f64 * impurity;
    }
    result
}

/// Number of unordered object pairs sharing a group but differing in decision.
///
/// Not normalized by `n_elements`.
pub fn conflicts_count(distribution: &Array2<u64>, _n_elements: usize) -> f64 {
    let conflicts: u64 = distribution
        .rows()
        .into_iter()
        .map(|row| {
            let (group_size, sum_sq) = group_totals(row);
            (group_size * group_size - sum_sq) / 2
        })
        .sum();
    conflicts as f64
}

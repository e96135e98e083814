//! Common test utilities for skrough-rust integration tests.

#![allow(dead_code)]

use ndarray::{Array1, Array2};
use rand::prelude::*;
use skrough_rust::*;

/// Attribute names of the golf table
pub const GOLF_ATTRS: [&str; 4] = ["Outlook", "Temperature", "Humidity", "Wind"];

/// The 14-row "play golf" table, factorized in first-occurrence order.
pub fn golf_dataset() -> FactorizedData {
    let rows = vec![
        vec!["sunny", "hot", "high", "weak"],
        vec!["sunny", "hot", "high", "strong"],
        vec!["overcast", "hot", "high", "weak"],
        vec!["rain", "mild", "high", "weak"],
        vec!["rain", "cool", "normal", "weak"],
        vec!["rain", "cool", "normal", "strong"],
        vec!["overcast", "cool", "normal", "strong"],
        vec!["sunny", "mild", "high", "weak"],
        vec!["sunny", "cool", "normal", "weak"],
        vec!["rain", "mild", "normal", "weak"],
        vec!["sunny", "mild", "normal", "strong"],
        vec!["overcast", "mild", "high", "strong"],
        vec!["overcast", "hot", "normal", "weak"],
        vec!["rain", "mild", "high", "strong"],
    ];
    let play = [
        "no", "no", "yes", "yes", "yes", "no", "yes", "no", "yes", "yes", "yes", "yes", "yes", "no",
    ];
    FactorizedData::from_records(&rows, &play)
        .and_then(|data| data.with_attr_names(GOLF_ATTRS.iter().map(|s| s.to_string()).collect()))
        .unwrap()
}

/// Random code table with the given domain size for every column.
pub fn random_codes(num_objects: usize, num_attrs: usize, domain: usize, seed: u64) -> Array2<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((num_objects, num_attrs), |_| rng.gen_range(0..domain))
}

/// Random table whose decision is a function of the first `relevant` columns.
pub fn create_dependent_table(
    num_objects: usize,
    num_attrs: usize,
    relevant: usize,
    seed: u64,
) -> FactorizedData {
    let x = random_codes(num_objects, num_attrs, 3, seed);
    let y: Array1<Code> = x
        .rows()
        .into_iter()
        .map(|row| row.iter().take(relevant).sum::<usize>() % 2)
        .collect();
    FactorizedData::from_codes(x, vec![3; num_attrs], y, 2).unwrap()
}

/// Chaos of `y` under `attrs`.
pub fn chaos_of(data: &FactorizedData, attrs: &[AttrIndex], chaos_fn: ChaosFn) -> f64 {
    GroupIndex::create_from_data(data.x(), data.x_counts(), attrs)
        .and_then(|gi| gi.get_chaos_score(data.y(), data.y_count(), chaos_fn))
        .unwrap()
}

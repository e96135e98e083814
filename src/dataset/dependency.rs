//! Functional dependency and (bi)reduct checks over code tables.
//!
//! Domain sizes are inferred from the data, so these checks accept any
//! non-negative code matrix.

use ndarray::{ArrayView1, ArrayView2};

use crate::core::error::{ensure_len, Result, RoughSetError};
use crate::core::types::{AttrIndex, Code, ObjIndex};
use crate::dataset::dataset::{infer_count, infer_counts};
use crate::measures::ChaosFn;
use crate::partition::GroupIndex;
use crate::structs::compute_chaos_score_stats;

/// True if `attrs` determine `y` on `objs`.
///
/// `None` means all objects or all attributes.
pub fn check_if_functional_dependency(
    x: ArrayView2<'_, Code>,
    y: ArrayView1<'_, Code>,
    objs: Option<&[ObjIndex]>,
    attrs: Option<&[AttrIndex]>,
) -> Result<bool> {
    ensure_len("y", x.nrows(), y.len())?;
    let all_attrs: Vec<AttrIndex>;
    let attrs = match attrs {
        Some(attrs) => attrs,
        None => {
            all_attrs = (0..x.ncols()).collect();
            &all_attrs
        }
    };
    let group_index = GroupIndex::create_from_data(x, &infer_counts(x), attrs)?;

    let mut decisions: Vec<Option<Code>> = vec![None; group_index.count()];
    let mut consistent = |obj: ObjIndex| -> Result<bool> {
        if obj >= x.nrows() {
            return Err(RoughSetError::index_out_of_bounds(obj, x.nrows()));
        }
        let slot = &mut decisions[group_index.index()[obj]];
        match slot {
            Some(decision) => Ok(*decision == y[obj]),
            None => {
                *slot = Some(y[obj]);
                Ok(true)
            }
        }
    };
    match objs {
        Some(objs) => {
            for &obj in objs {
                if !consistent(obj)? {
                    return Ok(false);
                }
            }
        }
        None => {
            for obj in 0..x.nrows() {
                if !consistent(obj)? {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

/// True if the full attribute set determines `y`.
pub fn check_if_consistent_table(x: ArrayView2<'_, Code>, y: ArrayView1<'_, Code>) -> Result<bool> {
    check_if_functional_dependency(x, y, None, None)
}

fn without(attrs: &[AttrIndex], skip: usize) -> Vec<AttrIndex> {
    attrs
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, &attr)| attr)
        .collect()
}

/// True if `attrs` determine `y` and no single attribute can be dropped.
pub fn check_if_reduct(
    x: ArrayView2<'_, Code>,
    y: ArrayView1<'_, Code>,
    attrs: &[AttrIndex],
) -> Result<bool> {
    if !check_if_functional_dependency(x, y, None, Some(attrs))? {
        return Ok(false);
    }
    for i in 0..attrs.len() {
        if check_if_functional_dependency(x, y, None, Some(&without(attrs, i)))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if `attrs` reach the epsilon approximation threshold and no single
/// attribute can be dropped without leaving it.
pub fn check_if_approx_reduct(
    x: ArrayView2<'_, Code>,
    y: ArrayView1<'_, Code>,
    attrs: &[AttrIndex],
    chaos_fn: ChaosFn,
    epsilon: f64,
) -> Result<bool> {
    ensure_len("y", x.nrows(), y.len())?;
    let x_counts = infer_counts(x);
    let y_count = infer_count(y);
    let stats = compute_chaos_score_stats(x, &x_counts, y, y_count, chaos_fn, Some(epsilon), None)?;
    let threshold = stats.approx_threshold.unwrap_or(stats.total);

    let score = |attrs: &[AttrIndex]| -> Result<f64> {
        GroupIndex::create_from_data(x, &x_counts, attrs)?.get_chaos_score(y, y_count, chaos_fn)
    };
    if score(attrs)? > threshold {
        return Ok(false);
    }
    for i in 0..attrs.len() {
        if score(&without(attrs, i))? <= threshold {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if `attrs` determine `y` on `objs`, no attribute can be dropped, and
/// no further object can be added.
pub fn check_if_bireduct(
    x: ArrayView2<'_, Code>,
    y: ArrayView1<'_, Code>,
    objs: &[ObjIndex],
    attrs: &[AttrIndex],
) -> Result<bool> {
    if !check_if_functional_dependency(x, y, Some(objs), Some(attrs))? {
        return Ok(false);
    }
    for i in 0..attrs.len() {
        if check_if_functional_dependency(x, y, Some(objs), Some(&without(attrs, i)))? {
            return Ok(false);
        }
    }
    let mut extended = objs.to_vec();
    for obj in (0..x.nrows()).filter(|obj| !objs.contains(obj)) {
        extended.push(obj);
        if check_if_functional_dependency(x, y, Some(&extended), Some(attrs))? {
            return Ok(false);
        }
        extended.pop();
    }
    Ok(true)
}

//! Partition of objects into equivalence classes.
//!
//! A [`GroupIndex`] records, for every object, the label of the class it falls
//! into under some attribute subset. Refining the partition by one more
//! attribute is a radix combination of the old label with the attribute code;
//! compression then relabels the classes densely in order of first appearance,
//! so two indexes describing the same partition compress to identical labels.

use std::collections::HashMap;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::core::constants::DENSE_COMPRESSION_FACTOR;
use crate::core::error::{ensure_len, Result, RoughSetError};
use crate::core::types::{AttrIndex, Code, GroupId, ObjIndex};
use crate::measures::ChaosFn;

/// Equivalence classes of objects under an attribute subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIndex {
    /// Class label of each object
    index: Vec<GroupId>,
    /// Size of the label space; every label is `< count`
    count: usize,
}

/// Assigns dense ids to raw labels in order of first appearance.
///
/// Small label spaces use a lookup table, large ones a hash map.
struct DenseRelabeler {
    table: Vec<usize>,
    map: HashMap<usize, usize>,
    use_table: bool,
    next: usize,
}

impl DenseRelabeler {
    const UNSEEN: usize = usize::MAX;

    fn new(label_space: usize, n_objects: usize) -> Self {
        let use_table = label_space <= n_objects.saturating_mul(DENSE_COMPRESSION_FACTOR).max(16);
        DenseRelabeler {
            table: if use_table {
                vec![Self::UNSEEN; label_space]
            } else {
                Vec::new()
            },
            map: HashMap::new(),
            use_table,
            next: 0,
        }
    }

    /// Returns the dense id of `raw` and whether it was seen for the first time.
    #[inline]
    fn relabel(&mut self, raw: usize) -> (usize, bool) {
        if self.use_table {
            let slot = &mut self.table[raw];
            if *slot == Self::UNSEEN {
                *slot = self.next;
                self.next += 1;
                (*slot, true)
            } else {
                (*slot, false)
            }
        } else {
            let next = self.next;
            let id = *self.map.entry(raw).or_insert(next);
            let fresh = id == next;
            if fresh {
                self.next += 1;
            }
            (id, fresh)
        }
    }

    fn count(&self) -> usize {
        self.next
    }
}

impl GroupIndex {
    /// An index over zero objects.
    pub fn create_empty() -> Self {
        GroupIndex {
            index: Vec::new(),
            count: 0,
        }
    }

    /// All `size` objects in class 0.
    pub fn create_uniform(size: usize) -> Self {
        GroupIndex {
            index: vec![0; size],
            count: usize::from(size > 0),
        }
    }

    /// Wrap raw labels; `count` becomes max label + 1 unless compressed.
    ///
    /// Fails with a numerical error if a label is `usize::MAX`.
    pub fn create_from_index(index: Vec<GroupId>, compress: bool) -> Result<Self> {
        let count = match index.iter().max() {
            Some(&max) => max.checked_add(1).ok_or_else(|| {
                RoughSetError::numerical(format!("group label {} leaves no room for a count", max))
            })?,
            None => 0,
        };
        let group_index = GroupIndex { index, count };
        Ok(if compress {
            group_index.compress()
        } else {
            group_index
        })
    }

    /// Partition induced by `attrs` over the rows of `x`.
    ///
    /// Empty `attrs` yields the uniform one-group index.
    pub fn create_from_data(
        x: ArrayView2<'_, Code>,
        x_counts: &[usize],
        attrs: &[AttrIndex],
    ) -> Result<Self> {
        ensure_len("x_counts", x.ncols(), x_counts.len())?;
        let mut result = Self::create_uniform(x.nrows());
        for &attr in attrs {
            if attr >= x.ncols() {
                return Err(RoughSetError::index_out_of_bounds(attr, x.ncols()));
            }
            result = result.split(x.column(attr), x_counts[attr], true)?;
        }
        Ok(result)
    }

    /// Number of objects covered by this index.
    pub fn n_objects(&self) -> usize {
        self.index.len()
    }

    /// Size of the label space (number of classes once compressed).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Class label of each object.
    pub fn index(&self) -> &[GroupId] {
        &self.index
    }

    /// Refine by one more column; `new = old * values_count + value`.
    pub fn split(
        &self,
        values: ArrayView1<'_, Code>,
        values_count: usize,
        compress: bool,
    ) -> Result<GroupIndex> {
        ensure_len("values", self.n_objects(), values.len())?;
        let count = self.count.checked_mul(values_count).ok_or_else(|| {
            RoughSetError::numerical(format!(
                "group label space overflow: {} * {}",
                self.count, values_count
            ))
        })?;
        let mut index = Vec::with_capacity(self.index.len());
        for (&group, &value) in self.index.iter().zip(values.iter()) {
            if value >= values_count {
                return Err(RoughSetError::index_out_of_bounds(value, values_count));
            }
            index.push(group * values_count + value);
        }
        let result = GroupIndex { index, count };
        Ok(if compress { result.compress() } else { result })
    }

    /// Relabel classes densely to `[0, k)` in order of first appearance.
    pub fn compress(&self) -> GroupIndex {
        let mut relabeler = DenseRelabeler::new(self.count, self.n_objects());
        let index = self
            .index
            .iter()
            .map(|&raw| relabeler.relabel(raw).0)
            .collect();
        GroupIndex {
            index,
            count: relabeler.count(),
        }
    }

    /// `distribution[group][value]` counts of `values` per class.
    pub fn get_distribution(
        &self,
        values: ArrayView1<'_, Code>,
        values_count: usize,
    ) -> Result<Array2<u64>> {
        ensure_len("values", self.n_objects(), values.len())?;
        let mut distribution = Array2::<u64>::zeros((self.count, values_count));
        for (&group, &value) in self.index.iter().zip(values.iter()) {
            if value >= values_count {
                return Err(RoughSetError::index_out_of_bounds(value, values_count));
            }
            distribution[[group, value]] += 1;
        }
        Ok(distribution)
    }

    /// Chaos of `values` under this partition.
    pub fn get_chaos_score(
        &self,
        values: ArrayView1<'_, Code>,
        values_count: usize,
        chaos_fn: ChaosFn,
    ) -> Result<f64> {
        let distribution = self.get_distribution(values, values_count)?;
        Ok(chaos_fn(&distribution, self.n_objects()))
    }

    /// Chaos of `values` after splitting by `split_values`, without building
    /// the refined index.
    ///
    /// Equal to `split(split_values, .., true)?.get_chaos_score(values, ..)`.
    pub fn get_chaos_score_after_split(
        &self,
        split_values: ArrayView1<'_, Code>,
        split_values_count: usize,
        values: ArrayView1<'_, Code>,
        values_count: usize,
        chaos_fn: ChaosFn,
    ) -> Result<f64> {
        ensure_len("split_values", self.n_objects(), split_values.len())?;
        ensure_len("values", self.n_objects(), values.len())?;
        let label_space = self.count.checked_mul(split_values_count).ok_or_else(|| {
            RoughSetError::numerical(format!(
                "group label space overflow: {} * {}",
                self.count, split_values_count
            ))
        })?;

        let mut relabeler = DenseRelabeler::new(label_space, self.n_objects());
        let mut counts: Vec<u64> = Vec::new();
        for ((&group, &split_value), &value) in self
            .index
            .iter()
            .zip(split_values.iter())
            .zip(values.iter())
        {
            if split_value >= split_values_count {
                return Err(RoughSetError::index_out_of_bounds(split_value, split_values_count));
            }
            if value >= values_count {
                return Err(RoughSetError::index_out_of_bounds(value, values_count));
            }
            let (id, fresh) = relabeler.relabel(group * split_values_count + split_value);
            if fresh {
                counts.resize(counts.len() + values_count, 0);
            }
            counts[id * values_count + value] += 1;
        }

        let distribution = Array2::from_shape_vec((relabeler.count(), values_count), counts)
            .map_err(|e| RoughSetError::internal(format!("distribution shape: {}", e)))?;
        Ok(chaos_fn(&distribution, self.n_objects()))
    }

    /// Chaos of `values` restricted to `objs`, weighted by `objs.len()`.
    pub fn get_chaos_score_for_objects(
        &self,
        objs: &[ObjIndex],
        values: ArrayView1<'_, Code>,
        values_count: usize,
        chaos_fn: ChaosFn,
    ) -> Result<f64> {
        ensure_len("values", self.n_objects(), values.len())?;
        let mut distribution = Array2::<u64>::zeros((self.count, values_count));
        for &obj in objs {
            if obj >= self.n_objects() {
                return Err(RoughSetError::index_out_of_bounds(obj, self.n_objects()));
            }
            let value = values[obj];
            if value >= values_count {
                return Err(RoughSetError::index_out_of_bounds(value, values_count));
            }
            distribution[[self.index[obj], value]] += 1;
        }
        Ok(chaos_fn(&distribution, objs.len()))
    }

    /// Objects of each class, in object order. Expects a compressed index.
    pub fn groups(&self) -> Vec<Vec<ObjIndex>> {
        let mut groups = vec![Vec::new(); self.count];
        for (obj, &group) in self.index.iter().enumerate() {
            groups[group].push(obj);
        }
        groups.retain(|group| !group.is_empty());
        groups
    }

    /// True if every class holds a single value of `values`.
    pub fn is_consistent(&self, values: ArrayView1<'_, Code>, values_count: usize) -> Result<bool> {
        let distribution = self.get_distribution(values, values_count)?;
        Ok(distribution
            .rows()
            .into_iter()
            .all(|row| row.iter().filter(|&&c| c > 0).count() <= 1))
    }

    /// True if both indexes describe the same partition, whatever their labels.
    pub fn partition_eq(&self, other: &GroupIndex) -> bool {
        self.n_objects() == other.n_objects() && self.compress().index == other.compress().index
    }
}

impl Default for GroupIndex {
    fn default() -> Self {
        Self::create_empty()
    }
}

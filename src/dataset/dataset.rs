//! Factorized decision table.
//!
//! Holds the conditional attributes `x` (objects × attributes), the per-column
//! domain sizes, and the decision column. Every constructor checks that codes
//! stay inside their declared domains.

use std::hash::Hash;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_len, Result, RoughSetError};
use crate::core::types::{AttrIndex, Code};
use crate::dataset::factorize::factorize_column;

/// Decision table with dense categorical codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorizedData {
    /// Conditional attributes (num_objects × num_attrs)
    x: Array2<Code>,
    /// Domain size of each column of `x`
    x_counts: Vec<usize>,
    /// Decision codes (num_objects,)
    y: Array1<Code>,
    /// Domain size of `y`
    y_count: usize,
    /// Attribute names for display
    attr_names: Option<Vec<String>>,
}

impl FactorizedData {
    /// Create from already factorized codes.
    pub fn from_codes(
        x: Array2<Code>,
        x_counts: Vec<usize>,
        y: Array1<Code>,
        y_count: usize,
    ) -> Result<Self> {
        ensure_len("x_counts", x.ncols(), x_counts.len())?;
        ensure_len("y", x.nrows(), y.len())?;

        for (attr, (column, &count)) in x.columns().into_iter().zip(&x_counts).enumerate() {
            if let Some(&code) = column.iter().find(|&&code| code >= count) {
                return Err(crate::dataset_error!(
                    "attribute {} has code {} outside domain of size {}",
                    attr,
                    code,
                    count
                ));
            }
        }
        if let Some(&code) = y.iter().find(|&&code| code >= y_count) {
            return Err(crate::dataset_error!(
                "decision code {} outside domain of size {}",
                code,
                y_count
            ));
        }

        Ok(FactorizedData {
            x,
            x_counts,
            y,
            y_count,
            attr_names: None,
        })
    }

    /// Create from codes, taking each domain size as max code + 1.
    pub fn from_codes_inferred(x: Array2<Code>, y: Array1<Code>) -> Result<Self> {
        let x_counts = infer_counts(x.view());
        let y_count = infer_count(y.view());
        Self::from_codes(x, x_counts, y, y_count)
    }

    /// Factorize raw rows and decisions column by column.
    pub fn from_records<T, D>(rows: &[Vec<T>], decisions: &[D]) -> Result<Self>
    where
        T: Hash + Eq + Clone,
        D: Hash + Eq + Clone,
    {
        ensure_len("decisions", rows.len(), decisions.len())?;
        let num_attrs = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != num_attrs) {
            return Err(RoughSetError::dimension_mismatch(
                format!("row length {}", num_attrs),
                format!("row length {}", row.len()),
            ));
        }

        let mut x = Array2::<Code>::zeros((rows.len(), num_attrs));
        let mut x_counts = Vec::with_capacity(num_attrs);
        for attr in 0..num_attrs {
            let column: Vec<T> = rows.iter().map(|row| row[attr].clone()).collect();
            let (codes, count) = factorize_column(&column);
            x.column_mut(attr).assign(&Array1::from(codes));
            x_counts.push(count);
        }
        let (y, y_count) = factorize_column(decisions);

        Self::from_codes(x, x_counts, Array1::from(y), y_count)
    }

    /// Attach attribute names; must match the number of attributes.
    pub fn with_attr_names(mut self, names: Vec<String>) -> Result<Self> {
        ensure_len("attr_names", self.n_attrs(), names.len())?;
        self.attr_names = Some(names);
        Ok(self)
    }

    /// Conditional attributes
    pub fn x(&self) -> ArrayView2<'_, Code> {
        self.x.view()
    }

    /// Domain sizes of the conditional attributes
    pub fn x_counts(&self) -> &[usize] {
        &self.x_counts
    }

    /// Decision column
    pub fn y(&self) -> ArrayView1<'_, Code> {
        self.y.view()
    }

    /// Domain size of the decision
    pub fn y_count(&self) -> usize {
        self.y_count
    }

    /// Number of objects (rows)
    pub fn n_objects(&self) -> usize {
        self.x.nrows()
    }

    /// Number of conditional attributes (columns)
    pub fn n_attrs(&self) -> usize {
        self.x.ncols()
    }

    /// Attribute names, if attached
    pub fn attr_names(&self) -> Option<&[String]> {
        self.attr_names.as_deref()
    }

    /// Name of `attr`, falling back to its index.
    pub fn attr_name(&self, attr: AttrIndex) -> String {
        self.attr_names
            .as_ref()
            .and_then(|names| names.get(attr).cloned())
            .unwrap_or_else(|| attr.to_string())
    }
}

pub(crate) fn infer_count(values: ArrayView1<'_, Code>) -> usize {
    values.iter().max().map_or(0, |&max| max + 1)
}

pub(crate) fn infer_counts(x: ArrayView2<'_, Code>) -> Vec<usize> {
    x.columns().into_iter().map(infer_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_codes_validates_domains() {
        let x = array![[0usize, 1], [1, 0]];
        let y = array![0usize, 1];
        assert!(FactorizedData::from_codes(x.clone(), vec![2, 2], y.clone(), 2).is_ok());
        assert!(FactorizedData::from_codes(x.clone(), vec![2, 1], y.clone(), 2).is_err());
        assert!(FactorizedData::from_codes(x.clone(), vec![2, 2], y.clone(), 1).is_err());
        assert!(FactorizedData::from_codes(x, vec![2], y, 2).is_err());
    }

    #[test]
    fn test_from_codes_length_mismatch() {
        let x = array![[0usize], [1]];
        let y = array![0usize];
        let err = FactorizedData::from_codes(x, vec![2], y, 1).unwrap_err();
        assert!(matches!(err, RoughSetError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_from_codes_inferred() {
        let data = FactorizedData::from_codes_inferred(array![[0usize, 3], [2, 0]], array![1usize, 0])
            .unwrap();
        assert_eq!(data.x_counts(), &[3, 4]);
        assert_eq!(data.y_count(), 2);
    }

    #[test]
    fn test_from_records() {
        let rows = vec![
            vec!["sunny", "hot"],
            vec!["rainy", "hot"],
            vec!["sunny", "mild"],
        ];
        let data = FactorizedData::from_records(&rows, &["no", "yes", "yes"]).unwrap();
        assert_eq!(data.x(), array![[0usize, 0], [1, 0], [0, 1]]);
        assert_eq!(data.x_counts(), &[2, 2]);
        assert_eq!(data.y(), array![0usize, 1, 1]);
        assert_eq!(data.n_objects(), 3);
        assert_eq!(data.n_attrs(), 2);

        let ragged = vec![vec![1, 2], vec![1]];
        assert!(FactorizedData::from_records(&ragged, &[0, 1]).is_err());
    }

    #[test]
    fn test_attr_names() {
        let data = FactorizedData::from_codes_inferred(array![[0usize, 1]], array![0usize])
            .unwrap()
            .with_attr_names(vec!["a".into(), "b".into()])
            .unwrap();
        assert_eq!(data.attr_name(1), "b");
        assert_eq!(data.attr_name(5), "5");
    }
}

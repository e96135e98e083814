//! Mapping raw categorical values to dense codes.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::types::Code;

/// Encode `values` as dense codes in order of first occurrence.
///
/// Returns the codes and the domain size. Missing values can be passed as
/// `Option<T>`; `None` then forms a category of its own.
///
/// ```
/// use skrough_rust::dataset::factorize_column;
///
/// let (codes, count) = factorize_column(&[Some("b"), None, Some("a"), Some("b")]);
/// assert_eq!(codes, vec![0, 1, 2, 0]);
/// assert_eq!(count, 3);
/// ```
pub fn factorize_column<T: Hash + Eq + Clone>(values: &[T]) -> (Vec<Code>, usize) {
    let mut mapping: HashMap<T, Code> = HashMap::new();
    let codes = values
        .iter()
        .map(|value| {
            let next = mapping.len();
            *mapping.entry(value.clone()).or_insert(next)
        })
        .collect();
    (codes, mapping.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let (codes, count) = factorize_column(&["sunny", "rainy", "sunny", "overcast"]);
        assert_eq!(codes, vec![0, 1, 0, 2]);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_empty_column() {
        let (codes, count) = factorize_column::<u8>(&[]);
        assert!(codes.is_empty());
        assert_eq!(count, 0);
    }
}

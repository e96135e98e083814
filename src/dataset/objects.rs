//! Drawing the object part of a bireduct.

use ndarray::ArrayView1;

use crate::core::error::{ensure_len, Result};
use crate::core::types::{Code, ObjIndex, ObjectSelection};
use crate::core::utils::Random;
use crate::partition::GroupIndex;

/// Pick objects so that every group of `group_index` is decision-consistent.
///
/// Objects are visited in random order; the first object seen in a group fixes
/// that group's decision. Under [`ObjectSelection::Consistent`] every object
/// sharing that decision is kept, under [`ObjectSelection::Representatives`]
/// only the first one. The result is sorted by object index.
pub fn draw_objects(
    group_index: &GroupIndex,
    y: ArrayView1<'_, Code>,
    policy: ObjectSelection,
    rng: &mut Random,
) -> Result<Vec<ObjIndex>> {
    ensure_len("y", group_index.n_objects(), y.len())?;
    let mut decisions: Vec<Option<Code>> = vec![None; group_index.count()];
    let mut selected = Vec::new();
    for obj in rng.permutation(group_index.n_objects()) {
        let group = group_index.index()[obj];
        match decisions[group] {
            None => {
                decisions[group] = Some(y[obj]);
                selected.push(obj);
            }
            Some(decision) => {
                if policy == ObjectSelection::Consistent && decision == y[obj] {
                    selected.push(obj);
                }
            }
        }
    }
    selected.sort_unstable();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_consistent_objects() {
        let gi = GroupIndex::create_from_index(vec![0, 0, 0, 1, 1], true).unwrap();
        let y = array![0usize, 0, 1, 1, 1];
        let mut rng = Random::with_seed(5);
        let objs = draw_objects(&gi, y.view(), ObjectSelection::Consistent, &mut rng).unwrap();
        assert!(objs == vec![0, 1, 3, 4] || objs == vec![2, 3, 4]);
    }

    #[test]
    fn test_representatives() {
        let gi = GroupIndex::create_from_index(vec![0, 0, 1, 1, 2], true).unwrap();
        let y = array![0usize, 1, 1, 1, 0];
        let mut rng = Random::with_seed(5);
        let objs = draw_objects(&gi, y.view(), ObjectSelection::Representatives, &mut rng).unwrap();
        assert_eq!(objs.len(), 3);
        assert!(objs.contains(&4));
    }

    #[test]
    fn test_seed_determinism() {
        let gi = GroupIndex::create_from_index(vec![0, 1, 0, 1, 0, 1], true).unwrap();
        let y = array![0usize, 1, 1, 0, 0, 1];
        let a = draw_objects(&gi, y.view(), ObjectSelection::Consistent, &mut Random::with_seed(9)).unwrap();
        let b = draw_objects(&gi, y.view(), ObjectSelection::Consistent, &mut Random::with_seed(9)).unwrap();
        assert_eq!(a, b);
    }
}

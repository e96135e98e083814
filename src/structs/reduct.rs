//! Reduct and bireduct value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RoughSetError};
use crate::core::traits::Persistable;
use crate::core::types::{AttrIndex, ObjIndex};

/// Anything carrying a selected attribute subset.
pub trait AttrsSubset {
    /// Selected attributes, in selection order
    fn attrs(&self) -> &[AttrIndex];
}

/// Attribute subset approximately preserving the dependency on the decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reduct {
    /// Selected attributes, in selection order
    pub attrs: Vec<AttrIndex>,
}

impl Reduct {
    /// Create a reduct from its attributes.
    pub fn new(attrs: Vec<AttrIndex>) -> Self {
        Reduct { attrs }
    }

    /// Attributes in ascending order.
    pub fn sorted_attrs(&self) -> Vec<AttrIndex> {
        let mut attrs = self.attrs.clone();
        attrs.sort_unstable();
        attrs
    }
}

impl AttrsSubset for Reduct {
    fn attrs(&self) -> &[AttrIndex] {
        &self.attrs
    }
}

impl Persistable for Reduct {}

impl fmt::Display for Reduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reduct(attrs={:?})", self.attrs)
    }
}

/// Object subset paired with an attribute subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObjsAttrsSubset {
    /// Selected objects, ascending
    pub objs: Vec<ObjIndex>,
    /// Selected attributes, in selection order
    pub attrs: Vec<AttrIndex>,
}

/// A bireduct is an objects/attributes subset pair.
pub type Bireduct = ObjsAttrsSubset;

impl ObjsAttrsSubset {
    /// Create from objects and attributes.
    pub fn new(objs: Vec<ObjIndex>, attrs: Vec<AttrIndex>) -> Self {
        ObjsAttrsSubset { objs, attrs }
    }
}

impl AttrsSubset for ObjsAttrsSubset {
    fn attrs(&self) -> &[AttrIndex] {
        &self.attrs
    }
}

impl Persistable for ObjsAttrsSubset {}

impl fmt::Display for ObjsAttrsSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjsAttrsSubset(objs={:?}, attrs={:?})", self.objs, self.attrs)
    }
}

/// How many results select each attribute.
pub fn attrs_occurrence_counts<T: AttrsSubset>(results: &[T], n_attrs: usize) -> Result<Vec<usize>> {
    let mut counts = vec![0usize; n_attrs];
    for result in results {
        for &attr in result.attrs() {
            let slot = counts
                .get_mut(attr)
                .ok_or_else(|| RoughSetError::index_out_of_bounds(attr, n_attrs))?;
            *slot += 1;
        }
    }
    Ok(counts)
}

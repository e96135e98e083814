//! Result builders.

use crate::core::error::Result;
use crate::processing::hooks::PrepareResult;
use crate::processing::state::ProcessingState;
use crate::structs::{Bireduct, Reduct};

/// The selected attributes as a [`Reduct`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReductResult;

impl PrepareResult<Reduct> for ReductResult {
    fn prepare(&self, state: &ProcessingState) -> Result<Reduct> {
        Ok(Reduct::new(state.values.result_attrs.clone()))
    }
}

/// The selected objects and attributes as a [`Bireduct`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BireductResult;

impl PrepareResult<Bireduct> for BireductResult {
    fn prepare(&self, state: &ProcessingState) -> Result<Bireduct> {
        Ok(Bireduct::new(
            state.values.result_objs.clone(),
            state.values.result_attrs.clone(),
        ))
    }
}

/// Same builder as [`BireductResult`]; a bireduct is an [`ObjsAttrsSubset`](crate::structs::ObjsAttrsSubset).
pub type ObjsAttrsSubsetResult = BireductResult;

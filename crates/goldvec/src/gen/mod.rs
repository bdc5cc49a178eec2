//! Reference-data generators.
//!
//! Purpose
//! - One generator per reference family: Kronecker fixtures, coordinate
//!   meshes, window functions, uniform-sample statistics.
//! - All share the uniform construction contract `new(dtype, size)` and the
//!   execution contract `run() -> RecordSet`, so a harness can drive the
//!   whole suite through [`build_generator`] by name.
//!
//! Model
//! - `size` is an ordered list of dimensions; each generator consumes only
//!   the prefix it documents and validates that prefix at construction.
//! - `run(&self)` is infallible and recomputes its outputs from scratch;
//!   numeric boundary cases (e.g. NaN variance for an empty sample) pass
//!   through unmasked.

use std::fmt;

use crate::record::{Dtype, RecordSet};

mod kron;
mod mesh;
mod stats;
mod window;

pub use kron::KronOperator;
pub use mesh::{linspace, meshgrid, MeshgridOperator};
pub use stats::{population_std, population_var, StatsOperator};
pub use window::{bartlett, blackman, hamming, hanning, WindowOperator};


/// Error type shared by all generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Common trait for reference-data generators.
pub trait VectorGenerator {
    /// Registry name, matching the key accepted by [`build_generator`].
    fn name(&self) -> &'static str;

    /// Element-type tag the generator was constructed with (reserved).
    fn dtype(&self) -> Dtype;

    /// Compute the full record set for this generator.
    fn run(&self) -> RecordSet;
}

/// Registered generator names, in registry order.
pub fn generator_names() -> [&'static str; 4] {
    ["kron_operator", "meshgrid_operator", "window", "stats"]
}

/// Build a generator by registry name.
///
/// `dtype` must parse as a [`Dtype`]; `size` semantics are per generator
/// (ignored, `[rows, cols]`, or `[len]`). Unknown names and short `size`
/// lists fail with [`GeneratorError::InvalidParams`].
pub fn build_generator(
    name: &str,
    dtype: &str,
    size: &[usize],
) -> Result<Box<dyn VectorGenerator>, GeneratorError> {
    let dtype: Dtype = dtype.parse()?;
    match name {
        "kron_operator" => Ok(Box::new(KronOperator::new(dtype, size)?)),
        "meshgrid_operator" => Ok(Box::new(MeshgridOperator::new(dtype, size)?)),
        "window" => Ok(Box::new(WindowOperator::new(dtype, size)?)),
        "stats" => Ok(Box::new(StatsOperator::new(dtype, size)?)),
        other => Err(GeneratorError::invalid(format!(
            "unknown generator name: {other}"
        ))),
    }
}

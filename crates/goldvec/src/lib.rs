//! Golden test-vector generators.
//!
//! Purpose
//! - Produce small, named reference arrays (Kronecker fixtures, coordinate
//!   meshes, window functions, uniform-sample statistics) for regression
//!   suites of a numeric library under test.
//! - Each generator is configured once with `(dtype, size)` and then yields a
//!   fresh [`record::RecordSet`] on every `run()`; consumers serialize the
//!   records and diff them against the library's outputs.
//!
//! Design
//! - Generators are stateless values: `run(&self)` recomputes everything, so
//!   repeated runs agree and instances are `Send + Sync` for free.
//! - The one random generator ([`gen::StatsOperator`]) is replayable from a
//!   `u64` seed, so recorded vectors can be regenerated exactly.

pub mod gen;
pub mod record;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{
        build_generator, generator_names, GeneratorError, KronOperator, MeshgridOperator,
        StatsOperator, VectorGenerator, WindowOperator,
    };
    pub use crate::record::{Dtype, RecordSet, Value};
}

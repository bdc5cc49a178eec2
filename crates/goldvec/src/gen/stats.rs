//! Descriptive statistics over a uniform [0, 1) sample.
//!
//! The one source of randomness in the suite. Draws are replayable: the
//! operator owns a `u64` seed and rebuilds the same `StdRng` on every run,
//! so a harness can record the seed next to the vectors and regenerate them.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GeneratorError, VectorGenerator};
use crate::record::{Dtype, RecordSet};

/// Population variance (ddof = 0). Empty input yields NaN.
pub fn population_var(x: &DVector<f64>) -> f64 {
    let n = x.len() as f64;
    let mean = x.sum() / n;
    x.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

/// Population standard deviation, `sqrt` of [`population_var`].
pub fn population_std(x: &DVector<f64>) -> f64 {
    population_var(x).sqrt()
}

/// Generator for the `"x"` / `"var"` / `"std"` sample-statistics records.
///
/// `size[0]` is the sample count; further elements are ignored.
pub struct StatsOperator {
    dtype: Dtype,
    len: usize,
    seed: u64,
}

impl StatsOperator {
    /// Construct with a fresh seed from the thread RNG.
    pub fn new(dtype: Dtype, size: &[usize]) -> Result<Self, GeneratorError> {
        Self::with_seed(dtype, size, rand::thread_rng().gen())
    }

    /// Construct with an explicit seed; `run()` is then fully deterministic.
    pub fn with_seed(dtype: Dtype, size: &[usize], seed: u64) -> Result<Self, GeneratorError> {
        let len = *size
            .first()
            .ok_or_else(|| GeneratorError::invalid("size must provide the sample count"))?;
        Ok(Self { dtype, len, seed })
    }

    /// Seed replaying this operator's draw.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl VectorGenerator for StatsOperator {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn dtype(&self) -> Dtype {
        self.dtype
    }

    fn run(&self) -> RecordSet {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let x = DVector::from_fn(self.len, |_, _| rng.gen::<f64>());
        let var = population_var(&x);
        let std = var.sqrt();

        let mut out = RecordSet::new();
        out.insert("x", x);
        out.insert("var", var);
        out.insert("std", std);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[test]
    fn seed_replays_exactly() {
        let a = StatsOperator::with_seed(Dtype::F64, &[32], 42).unwrap();
        let b = StatsOperator::with_seed(Dtype::F64, &[32], 42).unwrap();
        assert_eq!(a.run(), b.run());
        assert_eq!(a.run(), a.run());
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn distinct_seeds_differ() {
        let a = StatsOperator::with_seed(Dtype::F64, &[32], 1).unwrap();
        let b = StatsOperator::with_seed(Dtype::F64, &[32], 2).unwrap();
        let xa = a.run().get("x").and_then(Value::as_vector).cloned().unwrap();
        let xb = b.run().get("x").and_then(Value::as_vector).cloned().unwrap();
        assert_ne!(xa, xb);
    }

    #[test]
    fn known_values_variance() {
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        // mean 2.5, squared deviations 2.25 + 0.25 + 0.25 + 2.25 = 5.0
        assert!((population_var(&x) - 1.25).abs() < 1e-12);
        assert!((population_std(&x) - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_sample_is_nan() {
        let out = StatsOperator::with_seed(Dtype::F64, &[0], 7).unwrap().run();
        assert_eq!(out.get("x").and_then(Value::as_vector).unwrap().len(), 0);
        assert!(out.get("var").and_then(Value::as_scalar).unwrap().is_nan());
        assert!(out.get("std").and_then(Value::as_scalar).unwrap().is_nan());
    }

    #[test]
    fn empty_size_rejected() {
        assert!(StatsOperator::with_seed(Dtype::F64, &[], 0).is_err());
    }
}

//! Window-function reference data (Hamming, Hanning, Blackman, Bartlett).
//!
//! Model
//! - Closed-form sequences of length `N` over `n = 0..N-1`, with the
//!   `N-1` denominator guarded: `N = 1` is `[1.0]`, `N = 0` is empty.
//! - Hamming/Hanning/Blackman share the generalized-cosine form
//!   `a0 - a1·cos(2πn/(N-1)) + a2·cos(4πn/(N-1))`; Bartlett is the
//!   triangular ramp.

use std::f64::consts::PI;

use nalgebra::DVector;

use super::{GeneratorError, VectorGenerator};
use crate::record::{Dtype, RecordSet};

fn cosine_window(n: usize, a0: f64, a1: f64, a2: f64) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, 1.0),
        _ => {
            let denom = (n - 1) as f64;
            DVector::from_fn(n, |k, _| {
                let theta = 2.0 * PI * k as f64 / denom;
                a0 - a1 * theta.cos() + a2 * (2.0 * theta).cos()
            })
        }
    }
}

/// Hamming window: `0.54 - 0.46·cos(2πn/(N-1))`.
pub fn hamming(n: usize) -> DVector<f64> {
    cosine_window(n, 0.54, 0.46, 0.0)
}

/// Hanning window: `0.5 - 0.5·cos(2πn/(N-1))`.
pub fn hanning(n: usize) -> DVector<f64> {
    cosine_window(n, 0.5, 0.5, 0.0)
}

/// Blackman window: `0.42 - 0.5·cos(2πn/(N-1)) + 0.08·cos(4πn/(N-1))`.
pub fn blackman(n: usize) -> DVector<f64> {
    cosine_window(n, 0.42, 0.5, 0.08)
}

/// Bartlett (triangular) window: `1 - |n - (N-1)/2| / ((N-1)/2)`.
pub fn bartlett(n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, 1.0),
        _ => {
            let half = (n - 1) as f64 / 2.0;
            DVector::from_fn(n, |k, _| 1.0 - (k as f64 - half).abs() / half)
        }
    }
}

/// Generator for the four standard window-function records.
///
/// `size[0]` is the window length; further elements are ignored.
pub struct WindowOperator {
    dtype: Dtype,
    len: usize,
}

impl WindowOperator {
    pub fn new(dtype: Dtype, size: &[usize]) -> Result<Self, GeneratorError> {
        let len = *size
            .first()
            .ok_or_else(|| GeneratorError::invalid("size must provide the window length"))?;
        Ok(Self { dtype, len })
    }
}

impl VectorGenerator for WindowOperator {
    fn name(&self) -> &'static str {
        "window"
    }

    fn dtype(&self) -> Dtype {
        self.dtype
    }

    fn run(&self) -> RecordSet {
        let mut out = RecordSet::new();
        out.insert("hamming", hamming(self.len));
        out.insert("hanning", hanning(self.len));
        out.insert("blackman", blackman(self.len));
        out.insert("bartlett", bartlett(self.len));
        out
    }
}

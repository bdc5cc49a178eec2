//! Coordinate-mesh reference data (`linspace` + `meshgrid`).

use nalgebra::{DMatrix, DVector};

use super::{GeneratorError, VectorGenerator};
use crate::record::{Dtype, RecordSet};

/// `n` evenly spaced samples from `start` to `stop` inclusive.
///
/// `n = 1` yields `[start]`; `n = 0` yields an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => {
            let step = (stop - start) / ((n - 1) as f64);
            DVector::from_fn(n, |i, _| start + step * i as f64)
        }
    }
}

/// Coordinate matrices from axis vectors, numpy `meshgrid` convention:
/// `X[i][j] = x[j]` (constant along rows), `Y[i][j] = y[i]` (constant along
/// columns). Output shape is `y.len() × x.len()`.
pub fn meshgrid(x: &DVector<f64>, y: &DVector<f64>) -> (DMatrix<f64>, DMatrix<f64>) {
    let (rows, cols) = (y.len(), x.len());
    let xx = DMatrix::from_fn(rows, cols, |_, j| x[j]);
    let yy = DMatrix::from_fn(rows, cols, |i, _| y[i]);
    (xx, yy)
}

/// Generator for the `"X"` / `"Y"` coordinate-mesh records.
///
/// `size` is `[rows, cols]`; axes run from 1 to the axis length inclusive.
pub struct MeshgridOperator {
    dtype: Dtype,
    rows: usize,
    cols: usize,
}

impl MeshgridOperator {
    pub fn new(dtype: Dtype, size: &[usize]) -> Result<Self, GeneratorError> {
        if size.len() < 2 {
            return Err(GeneratorError::invalid("size must provide [rows, cols]"));
        }
        Ok(Self {
            dtype,
            rows: size[0],
            cols: size[1],
        })
    }
}

impl VectorGenerator for MeshgridOperator {
    fn name(&self) -> &'static str {
        "meshgrid_operator"
    }

    fn dtype(&self) -> Dtype {
        self.dtype
    }

    fn run(&self) -> RecordSet {
        let x = linspace(1.0, self.cols as f64, self.cols);
        let y = linspace(1.0, self.rows as f64, self.rows);
        let (xx, yy) = meshgrid(&x, &y);

        let mut out = RecordSet::new();
        out.insert("X", xx);
        out.insert("Y", yy);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[test]
    fn linspace_unit_stride_and_edges() {
        let v = linspace(1.0, 5.0, 5);
        for (i, val) in v.iter().enumerate() {
            assert_eq!(*val, (i + 1) as f64);
        }
        assert_eq!(linspace(1.0, 1.0, 1)[0], 1.0);
        assert_eq!(linspace(1.0, 0.0, 0).len(), 0);
    }

    #[test]
    fn mesh_2x3_exact_values() {
        let gen = MeshgridOperator::new(Dtype::F64, &[2, 3]).unwrap();
        let out = gen.run();
        let xx = out.get("X").and_then(Value::as_matrix).unwrap();
        let yy = out.get("Y").and_then(Value::as_matrix).unwrap();
        assert_eq!(xx.shape(), (2, 3));
        assert_eq!(yy.shape(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(xx[(i, j)], (j + 1) as f64);
                assert_eq!(yy[(i, j)], (i + 1) as f64);
            }
        }
    }

    #[test]
    fn degenerate_axes() {
        // Axis of length 1 collapses to the single value 1.0.
        let out = MeshgridOperator::new(Dtype::F64, &[1, 4]).unwrap().run();
        let yy = out.get("Y").and_then(Value::as_matrix).unwrap();
        assert_eq!(yy.shape(), (1, 4));
        assert!(yy.iter().all(|v| *v == 1.0));

        // Axis of length 0 yields empty arrays with that dimension zero.
        let out = MeshgridOperator::new(Dtype::F64, &[0, 3]).unwrap().run();
        let xx = out.get("X").and_then(Value::as_matrix).unwrap();
        assert_eq!(xx.shape(), (0, 3));
    }

    #[test]
    fn short_size_rejected() {
        assert!(MeshgridOperator::new(Dtype::F64, &[2]).is_err());
    }
}

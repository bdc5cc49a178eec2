//! Kronecker-product reference fixtures.
//!
//! Both inputs are compile-time constants, so this generator is fully
//! deterministic: `"square"` exercises the block-diagonal pattern
//! `kron(I₄, B)`, `"rect"` the scalar-replication pattern `kron(A, 1₂ₓ₂)`.

use nalgebra::DMatrix;

use super::{GeneratorError, VectorGenerator};
use crate::record::{Dtype, RecordSet};

/// Generator for the two Kronecker-product fixtures.
///
/// `size` is accepted for the uniform construction contract but unused.
pub struct KronOperator {
    dtype: Dtype,
}

impl KronOperator {
    pub fn new(dtype: Dtype, _size: &[usize]) -> Result<Self, GeneratorError> {
        Ok(Self { dtype })
    }
}

impl VectorGenerator for KronOperator {
    fn name(&self) -> &'static str {
        "kron_operator"
    }

    fn dtype(&self) -> Dtype {
        self.dtype
    }

    fn run(&self) -> RecordSet {
        // kron(I₄, B): 8×8 with B repeated on the 2×2 diagonal blocks.
        let b = DMatrix::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let square = DMatrix::<f64>::identity(4, 4).kronecker(&b);

        // kron(A, ones): 4×6, each scalar of A replicated over a 2×2 block.
        let a = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rect = a.kronecker(&DMatrix::from_element(2, 2, 1.0));

        let mut out = RecordSet::new();
        out.insert("square", square);
        out.insert("rect", rect);
        out
    }
}

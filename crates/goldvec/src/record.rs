//! Output data model for generator results.
//!
//! - `Dtype`: element-type tag carried through the uniform construction
//!   interface. Reserved: every generator accepts and stores it, none
//!   consults it yet (all outputs are `f64`).
//! - `Value`: one named output, scalar or 1-D/2-D array.
//! - `RecordSet`: ordered name → value mapping returned by `run()`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use nalgebra::{DMatrix, DVector};

use crate::gen::GeneratorError;

/// Element-type tag (`"float32"` / `"float64"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dtype {
    F32,
    F64,
}

impl Dtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dtype::F32 => "float32",
            Dtype::F64 => "float64",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dtype {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" => Ok(Dtype::F32),
            "float64" => Ok(Dtype::F64),
            other => Err(GeneratorError::invalid(format!("unknown dtype: {other}"))),
        }
    }
}

/// A single named output of a generator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(DVector<f64>),
    Matrix(DMatrix<f64>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<DVector<f64>> for Value {
    fn from(v: DVector<f64>) -> Self {
        Value::Vector(v)
    }
}

impl From<DMatrix<f64>> for Value {
    fn from(m: DMatrix<f64>) -> Self {
        Value::Matrix(m)
    }
}

/// Ordered mapping from fixed record name to value.
///
/// Keys are `&'static str` because every generator has a fixed key set;
/// `BTreeMap` keeps iteration order stable for serialization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSet {
    entries: BTreeMap<&'static str, Value>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<Value>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_parses_and_prints() {
        let d: Dtype = "float64".parse().unwrap();
        assert_eq!(d, Dtype::F64);
        assert_eq!(d.as_str(), "float64");
        assert_eq!("float32".parse::<Dtype>().unwrap(), Dtype::F32);
        assert!("int8".parse::<Dtype>().is_err());
    }

    #[test]
    fn record_set_round_trip() {
        let mut rs = RecordSet::new();
        rs.insert("b", 2.0);
        rs.insert("a", DVector::from_vec(vec![1.0, 2.0]));
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.get("b").and_then(Value::as_scalar), Some(2.0));
        assert_eq!(rs.get("a").and_then(Value::as_vector).map(|v| v.len()), Some(2));
        assert!(rs.get("a").and_then(Value::as_scalar).is_none());
        // BTreeMap order, not insertion order.
        let keys: Vec<_> = rs.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}

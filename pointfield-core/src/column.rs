//! Typed columnar storage for point attributes

use crate::{Error, Result};
use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};

/// Scalar types a column can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    Float,
    Double,
    Int,
}

impl ScalarType {
    /// Resolve a declared type name into a scalar type
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "float" => Ok(ScalarType::Float),
            "double" => Ok(ScalarType::Double),
            "int" => Ok(ScalarType::Int),
            _ => Err(Error::InvalidFormat(format!(
                "Invalid property type: {}",
                name
            ))),
        }
    }

    /// The declared name of this scalar type
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::Int => "int",
        }
    }
}

/// A fixed-length typed column of attribute values
///
/// The variant doubles as the column's declared type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Float(Array1<f32>),
    Double(Array1<f64>),
    Int(Array1<i32>),
}

impl Column {
    /// Allocate a zero-filled column of the given type and length
    pub fn zeros(scalar_type: ScalarType, len: usize) -> Self {
        match scalar_type {
            ScalarType::Float => Column::Float(Array1::zeros(len)),
            ScalarType::Double => Column::Double(Array1::zeros(len)),
            ScalarType::Int => Column::Int(Array1::zeros(len)),
        }
    }

    /// The scalar type this column was declared with
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Column::Float(_) => ScalarType::Float,
            Column::Double(_) => ScalarType::Double,
            Column::Int(_) => ScalarType::Int,
        }
    }

    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Float(data) => data.len(),
            Column::Double(data) => data.len(),
            Column::Int(data) => data.len(),
        }
    }

    /// Check if the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one row as f64 regardless of storage type
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            Column::Float(data) => data.get(row).map(|v| *v as f64),
            Column::Double(data) => data.get(row).copied(),
            Column::Int(data) => data.get(row).map(|v| *v as f64),
        }
    }

    /// Gather the rows named by `indices` into a new f64 array
    ///
    /// Panics if any index is out of bounds.
    pub fn select_f64(&self, indices: &[usize]) -> Array1<f64> {
        match self {
            Column::Float(data) => data.select(Axis(0), indices).mapv(|v| v as f64),
            Column::Double(data) => data.select(Axis(0), indices),
            Column::Int(data) => data.select(Axis(0), indices).mapv(|v| v as f64),
        }
    }
}

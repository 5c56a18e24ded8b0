//! Lightweight wrapper for tensor shapes and dimension bookkeeping.

use crate::error::{TensorError, TensorResult};

/// Stores the logical dimensions of a tensor.
///
/// Rank 0 is legal and denotes a scalar holding exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Returns the rank-0 shape of a scalar tensor.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    /// Constructs a new shape from the provided dimensions.
    pub fn of<D: Into<Vec<usize>>>(dims: D) -> Self {
        Shape { dims: dims.into() }
    }

    /// Borrow the raw dimension slice for downstream calculations.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the rank (number of axes) of the shape.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Reports whether the shape is the rank-0 scalar shape.
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Computes the total number of elements implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Computes the element count, rejecting products that overflow `usize`.
    pub fn checked_num_elements(&self) -> TensorResult<usize> {
        let mut count = 1usize;
        for &dim in &self.dims {
            count = count.checked_mul(dim).ok_or_else(|| {
                TensorError::invalid_argument(format!(
                    "element count of shape {:?} overflows",
                    self.dims
                ))
            })?;
        }
        Ok(count)
    }

    /// Builds row-major contiguous strides with overflow checking.
    pub fn contiguous_strides(&self) -> TensorResult<Vec<usize>> {
        let mut strides = vec![0usize; self.dims.len()];
        let mut stride = 1usize;
        for axis in (0..self.dims.len()).rev() {
            strides[axis] = stride;
            stride = stride.checked_mul(self.dims[axis]).ok_or_else(|| {
                TensorError::invalid_argument(format!(
                    "stride computation for shape {:?} overflows",
                    self.dims
                ))
            })?;
        }
        Ok(strides)
    }
}

//! Dense N-dimensional arrays over contiguous row-major storage.
//!
//! Two forms exist: [`DenseNdArray`] is the owned, mutable array handed to
//! tensor initializers, and [`DenseView`] is the frozen, shared read view
//! that dtype mappers produce over native buffers without copying.

use crate::buffer::{NativeBuffer, TensorData};
use crate::error::{TensorError, TensorResult};
use crate::shape::Shape;
use crate::storage::StorageElement;
use std::sync::Arc;

/// Resolves a shape-aware index into a flat offset.
///
/// An index is valid iff its rank equals the array rank and every coordinate
/// is within its axis. The empty index addresses the single element of a
/// rank-0 array.
fn dense_offset(shape: &Shape, strides: &[usize], index: &[usize]) -> TensorResult<usize> {
    if index.len() != shape.rank() {
        return Err(TensorError::invalid_argument(format!(
            "index rank {} does not match array rank {}",
            index.len(),
            shape.rank()
        )));
    }
    let mut offset = 0usize;
    for axis in 0..index.len() {
        if index[axis] >= shape.dims()[axis] {
            return Err(TensorError::IndexOutOfBounds {
                index: index.to_vec(),
                dims: shape.dims().to_vec(),
            });
        }
        offset += index[axis] * strides[axis];
    }
    Ok(offset)
}

/// Owned, mutable dense array used as the target of tensor initializers.
#[derive(Clone, Debug)]
pub struct DenseNdArray<E: StorageElement> {
    shape: Shape,
    strides: Vec<usize>,
    data: Vec<E>,
}

impl<E: StorageElement> DenseNdArray<E> {
    /// Allocates a zero-filled array of the given shape.
    pub fn zeroed(shape: Shape) -> TensorResult<Self> {
        let len = shape.checked_num_elements()?;
        let strides = shape.contiguous_strides()?;
        Ok(DenseNdArray {
            shape,
            strides,
            data: vec![E::zero(); len],
        })
    }

    /// Wraps owned values, validating the length against the shape.
    pub fn from_vec(shape: Shape, data: Vec<E>) -> TensorResult<Self> {
        let len = shape.checked_num_elements()?;
        if data.len() != len {
            return Err(TensorError::invalid_argument(format!(
                "data length {} does not match shape {:?}",
                data.len(),
                shape.dims()
            )));
        }
        let strides = shape.contiguous_strides()?;
        Ok(DenseNdArray {
            shape,
            strides,
            data,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the total number of elements stored in the array.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Reads the element at a shape-aware index.
    pub fn get(&self, index: &[usize]) -> TensorResult<E> {
        let offset = dense_offset(&self.shape, &self.strides, index)?;
        Ok(self.data[offset])
    }

    /// Writes the element at a shape-aware index.
    pub fn set(&mut self, index: &[usize], value: E) -> TensorResult<()> {
        let offset = dense_offset(&self.shape, &self.strides, index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Writes the single element of a rank-0 array.
    pub fn set_scalar(&mut self, value: E) -> TensorResult<()> {
        self.set(&[], value)
    }

    /// Fills the array with a constant value.
    pub fn fill(&mut self, value: E) {
        self.data.fill(value);
    }

    /// Copies `values` into the array in row-major order.
    pub fn copy_from_slice(&mut self, values: &[E]) -> TensorResult<()> {
        if values.len() != self.data.len() {
            return Err(TensorError::invalid_argument(format!(
                "source length {} does not match array length {}",
                values.len(),
                self.data.len()
            )));
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// Borrows the row-major element slice.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Freezes the array into shared storage without copying.
    pub fn into_data(self) -> TensorData {
        E::wrap(self.data.into())
    }
}

/// Frozen, shared dense read view over a native buffer.
#[derive(Clone, Debug)]
pub struct DenseView<E: StorageElement> {
    shape: Shape,
    strides: Vec<usize>,
    data: Arc<[E]>,
}

impl<E: StorageElement> DenseView<E> {
    /// Maps a native buffer into a shape-aware view without copying.
    ///
    /// The view aliases the buffer's storage. Fails when the buffer holds a
    /// different element kind or the wrong number of elements.
    pub fn map(buffer: &NativeBuffer, shape: Shape) -> TensorResult<Self> {
        let data = E::clone_arc(buffer.data()).ok_or_else(|| {
            TensorError::invalid_argument(format!(
                "buffer does not hold {} elements",
                std::any::type_name::<E>()
            ))
        })?;
        let expected = shape.checked_num_elements()?;
        if data.len() != expected {
            return Err(TensorError::invalid_argument(format!(
                "buffer holds {} elements but shape {:?} needs {}",
                data.len(),
                shape.dims(),
                expected
            )));
        }
        let strides = shape.contiguous_strides()?;
        Ok(DenseView {
            shape,
            strides,
            data,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Reads the element at a shape-aware index.
    pub fn get(&self, index: &[usize]) -> TensorResult<E> {
        let offset = dense_offset(&self.shape, &self.strides, index)?;
        Ok(self.data[offset])
    }

    /// Reads the single element of a rank-0 view.
    pub fn scalar(&self) -> TensorResult<E> {
        self.get(&[])
    }

    /// Borrows the row-major element slice.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<E> {
        self.data.to_vec()
    }

    /// Exposes the shared storage for aliasing checks.
    pub fn data_arc(&self) -> &Arc<[E]> {
        &self.data
    }
}

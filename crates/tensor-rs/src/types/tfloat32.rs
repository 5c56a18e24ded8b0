//! IEEE-754 single-precision 32-bit float tensor type.

use super::family::{TNumber, TensorType};
use crate::buffer::NativeBuffer;
use crate::dtype::DataType;
use crate::error::TensorResult;
use crate::ndarray::{DenseNdArray, DenseView};
use crate::shape::Shape;
use crate::tensor::Tensor;

/// 32-bit float tensor type tag.
pub enum TFloat32 {}

static DTYPE: DataType<TFloat32> = DataType::create("FLOAT", 1, 4, map_dense);

fn map_dense(buffer: &NativeBuffer, shape: Shape) -> TensorResult<DenseView<f32>> {
    DenseView::map(buffer, shape)
}

impl TensorType for TFloat32 {
    type Elem = f32;

    fn dtype() -> &'static DataType<TFloat32> {
        &DTYPE
    }
}

impl TNumber for TFloat32 {}

impl TFloat32 {
    /// Allocates a new tensor for storing a single float value.
    pub fn scalar_of(value: f32) -> TensorResult<Tensor<TFloat32>> {
        Tensor::of(Shape::scalar(), |data| data.set_scalar(value))
    }

    /// Allocates a new tensor for storing a vector of floats.
    pub fn vector_of(values: &[f32]) -> TensorResult<Tensor<TFloat32>> {
        Tensor::from_slice(Shape::of([values.len()]), values)
    }

    /// Allocates a new zero-filled tensor of the given shape.
    pub fn tensor_of(shape: Shape) -> TensorResult<Tensor<TFloat32>> {
        Tensor::zeroed(shape)
    }

    /// Allocates a new tensor of the given shape, initialized with the
    /// provided data.
    pub fn tensor_of_slice(shape: Shape, values: &[f32]) -> TensorResult<Tensor<TFloat32>> {
        Tensor::from_slice(shape, values)
    }

    /// Allocates a new tensor which is a copy of the given dense array.
    ///
    /// The tensor has the same shape as the source array and its data is
    /// copied.
    pub fn tensor_of_array(src: &DenseNdArray<f32>) -> TensorResult<Tensor<TFloat32>> {
        Tensor::from_array(src)
    }

    /// Allocates a new tensor of the given shape and initializes its data.
    pub fn tensor_of_init<F>(shape: Shape, init: F) -> TensorResult<Tensor<TFloat32>>
    where
        F: FnOnce(&mut DenseNdArray<f32>) -> TensorResult<()>,
    {
        Tensor::of(shape, init)
    }
}

//! 32-bit signed integer tensor type.

use super::family::{TNumber, TensorType};
use crate::buffer::NativeBuffer;
use crate::dtype::DataType;
use crate::error::TensorResult;
use crate::ndarray::{DenseNdArray, DenseView};
use crate::shape::Shape;
use crate::tensor::Tensor;

/// 32-bit signed integer tensor type tag.
pub enum TInt32 {}

static DTYPE: DataType<TInt32> = DataType::create("INT32", 3, 4, map_dense);

fn map_dense(buffer: &NativeBuffer, shape: Shape) -> TensorResult<DenseView<i32>> {
    DenseView::map(buffer, shape)
}

impl TensorType for TInt32 {
    type Elem = i32;

    fn dtype() -> &'static DataType<TInt32> {
        &DTYPE
    }
}

impl TNumber for TInt32 {}

impl TInt32 {
    pub fn scalar_of(value: i32) -> TensorResult<Tensor<TInt32>> {
        Tensor::of(Shape::scalar(), |data| data.set_scalar(value))
    }

    pub fn vector_of(values: &[i32]) -> TensorResult<Tensor<TInt32>> {
        Tensor::from_slice(Shape::of([values.len()]), values)
    }

    pub fn tensor_of(shape: Shape) -> TensorResult<Tensor<TInt32>> {
        Tensor::zeroed(shape)
    }

    pub fn tensor_of_slice(shape: Shape, values: &[i32]) -> TensorResult<Tensor<TInt32>> {
        Tensor::from_slice(shape, values)
    }

    pub fn tensor_of_array(src: &DenseNdArray<i32>) -> TensorResult<Tensor<TInt32>> {
        Tensor::from_array(src)
    }

    pub fn tensor_of_init<F>(shape: Shape, init: F) -> TensorResult<Tensor<TInt32>>
    where
        F: FnOnce(&mut DenseNdArray<i32>) -> TensorResult<()>,
    {
        Tensor::of(shape, init)
    }
}

//! Typed tensor handle wrapping a native buffer and its mapped dense view.

use crate::buffer::{BufferSpec, NativeBuffer};
use crate::dtype::DataType;
use crate::error::{TensorError, TensorResult};
use crate::ndarray::{DenseNdArray, DenseView};
use crate::runtime::{active_runtime, NativeRuntime, TensorInit};
use crate::shape::Shape;
use crate::types::TensorType;
use std::fmt;

/// Typed tensor backed by runtime-owned storage.
///
/// The handle keeps the native buffer alive and exposes the dense read view
/// produced by the dtype's mapping callback; the view always aliases the
/// buffer's storage.
pub struct Tensor<T: TensorType> {
    shape: Shape,
    buffer: NativeBuffer,
    view: DenseView<T::Elem>,
}

impl<T: TensorType> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Tensor {
            shape: self.shape.clone(),
            buffer: self.buffer.clone(),
            view: self.view.clone(),
        }
    }
}

impl<T: TensorType> Tensor<T> {
    /// Allocates a tensor of the given shape and runs `init` over its data.
    pub fn of<F>(shape: Shape, init: F) -> TensorResult<Self>
    where
        F: FnOnce(&mut DenseNdArray<T::Elem>) -> TensorResult<()>,
    {
        Self::of_on(active_runtime()?.as_ref(), shape, init)
    }

    /// Variant of [`Tensor::of`] targeting an explicit runtime.
    pub fn of_on<F>(runtime: &dyn NativeRuntime, shape: Shape, init: F) -> TensorResult<Self>
    where
        F: FnOnce(&mut DenseNdArray<T::Elem>) -> TensorResult<()>,
    {
        let mut staging = DenseNdArray::<T::Elem>::zeroed(shape.clone())?;
        init(&mut staging)?;
        let spec = BufferSpec::new(T::dtype().code(), staging.num_elements());
        let buffer = runtime.materialize(TensorInit::Adopt(spec, staging.into_data()))?;
        Self::wrap_buffer(buffer, shape)
    }

    /// Allocates a zero-filled tensor of the given shape.
    pub fn zeroed(shape: Shape) -> TensorResult<Self> {
        Self::zeroed_on(active_runtime()?.as_ref(), shape)
    }

    pub fn zeroed_on(runtime: &dyn NativeRuntime, shape: Shape) -> TensorResult<Self> {
        let count = shape.checked_num_elements()?;
        let spec = BufferSpec::new(T::dtype().code(), count);
        let buffer = runtime.materialize(TensorInit::Zeroed(spec))?;
        Self::wrap_buffer(buffer, shape)
    }

    /// Allocates a tensor of the given shape, copying `values` into it.
    ///
    /// The length must equal the shape's element count; the mismatch is
    /// rejected before the runtime is consulted.
    pub fn from_slice(shape: Shape, values: &[T::Elem]) -> TensorResult<Self> {
        Self::from_slice_on(active_runtime()?.as_ref(), shape, values)
    }

    pub fn from_slice_on(
        runtime: &dyn NativeRuntime,
        shape: Shape,
        values: &[T::Elem],
    ) -> TensorResult<Self> {
        let count = shape.checked_num_elements()?;
        if values.len() != count {
            return Err(TensorError::invalid_argument(format!(
                "data length {} does not match shape {:?}",
                values.len(),
                shape.dims()
            )));
        }
        Self::of_on(runtime, shape, |data| data.copy_from_slice(values))
    }

    /// Allocates a tensor which is a copy of the given dense array.
    pub fn from_array(src: &DenseNdArray<T::Elem>) -> TensorResult<Self> {
        Self::from_array_on(active_runtime()?.as_ref(), src)
    }

    pub fn from_array_on(
        runtime: &dyn NativeRuntime,
        src: &DenseNdArray<T::Elem>,
    ) -> TensorResult<Self> {
        Self::from_slice_on(runtime, src.shape().clone(), src.as_slice())
    }

    /// Wraps an existing native buffer without copying.
    ///
    /// The resulting view aliases the buffer's storage and carries the
    /// requested shape.
    pub fn wrap(buffer: NativeBuffer, shape: Shape) -> TensorResult<Self> {
        Self::wrap_buffer(buffer, shape)
    }

    fn wrap_buffer(buffer: NativeBuffer, shape: Shape) -> TensorResult<Self> {
        let dtype = T::dtype();
        if buffer.spec().code() != dtype.code() {
            return Err(TensorError::invalid_argument(format!(
                "buffer dtype code {} does not match {} (code {})",
                buffer.spec().code(),
                dtype.name(),
                dtype.code()
            )));
        }
        let view = dtype.map(&buffer, shape.clone())?;
        Ok(Tensor {
            shape,
            buffer,
            view,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn num_elements(&self) -> usize {
        self.view.num_elements()
    }

    /// Returns the dtype descriptor of the tensor.
    pub fn dtype(&self) -> &'static DataType<T> {
        T::dtype()
    }

    /// Borrows the mapped dense read view.
    pub fn view(&self) -> &DenseView<T::Elem> {
        &self.view
    }

    /// Reads the element at a shape-aware index.
    pub fn get(&self, index: &[usize]) -> TensorResult<T::Elem> {
        self.view.get(index)
    }

    /// Reads the single element of a rank-0 tensor.
    pub fn scalar(&self) -> TensorResult<T::Elem> {
        self.view.scalar()
    }

    /// Borrows the row-major element slice.
    pub fn data(&self) -> &[T::Elem] {
        self.view.as_slice()
    }

    pub fn to_vec(&self) -> Vec<T::Elem> {
        self.view.to_vec()
    }

    /// Borrows the underlying native buffer.
    pub fn buffer(&self) -> &NativeBuffer {
        &self.buffer
    }
}

impl<T: TensorType> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("dtype", &T::dtype().name())
            .field("shape", &self.shape.dims())
            .finish()
    }
}

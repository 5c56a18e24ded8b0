//! Shared contiguous storage and the buffer currency exchanged with runtimes.

use crate::error::{TensorError, TensorResult};
use std::mem::size_of;
use std::sync::Arc;

/// Reference-counted contiguous element storage.
///
/// Cloning is zero-copy and aliases the underlying memory.
#[derive(Clone, Debug)]
pub enum TensorData {
    F32(Arc<[f32]>),
    I32(Arc<[i32]>),
}

impl TensorData {
    /// Returns the number of scalar elements held by the storage.
    pub fn element_count(&self) -> usize {
        match self {
            TensorData::F32(values) => values.len(),
            TensorData::I32(values) => values.len(),
        }
    }

    /// Returns the storage footprint in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            TensorData::F32(values) => values.len() * size_of::<f32>(),
            TensorData::I32(values) => values.len() * size_of::<i32>(),
        }
    }
}

/// Describes one allocation: a dtype code plus an element count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferSpec {
    code: u32,
    num_elements: usize,
}

impl BufferSpec {
    pub fn new(code: u32, num_elements: usize) -> Self {
        BufferSpec { code, num_elements }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }
}

/// A described allocation, the currency between runtimes and tensors.
///
/// Cloning aliases the stored data.
#[derive(Clone, Debug)]
pub struct NativeBuffer {
    spec: BufferSpec,
    data: TensorData,
}

impl NativeBuffer {
    /// Pairs a spec with its storage, rejecting element-count mismatches.
    pub fn new(spec: BufferSpec, data: TensorData) -> TensorResult<Self> {
        if data.element_count() != spec.num_elements() {
            return Err(TensorError::invalid_argument(format!(
                "storage holds {} elements but spec describes {}",
                data.element_count(),
                spec.num_elements()
            )));
        }
        Ok(NativeBuffer { spec, data })
    }

    pub fn spec(&self) -> &BufferSpec {
        &self.spec
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }
}

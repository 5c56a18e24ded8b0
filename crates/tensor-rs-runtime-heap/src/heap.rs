//! Reference allocation runtime backed by process-heap memory.

use tensor_rs::buffer::NativeBuffer;
use tensor_rs::dtype;
use tensor_rs::error::{TensorError, TensorResult};
use tensor_rs::runtime::{NativeRuntime, TensorInit};

/// Allocates tensor storage from the process heap.
///
/// Zero-fill allocation is driven by the dtype registry: the runtime
/// resolves the spec's code into a descriptor and delegates to its
/// allocator callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapRuntime;

impl HeapRuntime {
    pub fn new() -> Self {
        HeapRuntime
    }
}

impl NativeRuntime for HeapRuntime {
    fn runtime_name(&self) -> &str {
        "heap"
    }

    fn materialize(&self, init: TensorInit) -> TensorResult<NativeBuffer> {
        match init {
            TensorInit::Zeroed(spec) => {
                let descriptor = dtype::lookup_code(spec.code())
                    .ok_or(TensorError::UnknownDType { code: spec.code() })?;
                spec.num_elements()
                    .checked_mul(descriptor.byte_size())
                    .ok_or_else(|| {
                        TensorError::allocation(format!(
                            "{} elements of {} overflow the addressable byte range",
                            spec.num_elements(),
                            descriptor.name()
                        ))
                    })?;
                let data = descriptor.alloc_zeroed(spec.num_elements());
                NativeBuffer::new(spec, data)
            }
            TensorInit::Adopt(spec, data) => {
                if dtype::lookup_code(spec.code()).is_none() {
                    return Err(TensorError::UnknownDType { code: spec.code() });
                }
                NativeBuffer::new(spec, data)
            }
        }
    }
}

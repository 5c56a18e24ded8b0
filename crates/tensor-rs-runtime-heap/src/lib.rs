pub mod heap;

pub use heap::HeapRuntime;

use std::sync::Arc;
use tensor_rs::runtime::NativeRuntime;

/// Register the heap runtime with the global runtime registry.
///
/// This function is called automatically via a static initializer, but can
/// also be called manually to ensure the runtime is registered.
pub fn register_heap_runtime() {
    tensor_rs::runtime::register_runtime("heap", || {
        Arc::new(HeapRuntime::new()) as Arc<dyn NativeRuntime>
    });
}

// Auto-register on library load
#[cfg(not(target_family = "wasm"))]
#[used]
#[link_section = ".init_array"]
static REGISTER_HEAP_RUNTIME: extern "C" fn() = {
    extern "C" fn register() {
        register_heap_runtime();
    }
    register
};

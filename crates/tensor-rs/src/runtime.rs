//! Allocation runtime contract and the name-based runtime registry.
//!
//! Runtimes own the backing storage of tensors. The core crate only defines
//! the contract; concrete runtimes register themselves by name (the
//! reference heap runtime lives in `tensor-rs-runtime-heap`) and the
//! process-wide default is resolved once through `TENSORRS_RUNTIME`.

use crate::buffer::{BufferSpec, NativeBuffer, TensorData};
use crate::error::{TensorError, TensorResult};
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, OnceLock, RwLock};

/// Host-side initialization request handed to a runtime.
#[derive(Clone, Debug)]
pub enum TensorInit {
    /// Allocate fresh zero-filled storage matching the spec.
    Zeroed(BufferSpec),
    /// Adopt host-built storage without copying.
    Adopt(BufferSpec, TensorData),
}

/// Contract implemented by tensor allocation runtimes.
pub trait NativeRuntime: Send + Sync {
    /// Returns a human-readable runtime identifier (e.g. "heap").
    fn runtime_name(&self) -> &str;

    /// Produces a native buffer for the given initialization request.
    fn materialize(&self, init: TensorInit) -> TensorResult<NativeBuffer>;
}

/// Factory function that creates a new runtime instance.
pub type RuntimeConstructor = Box<dyn Fn() -> Arc<dyn NativeRuntime> + Send + Sync>;

struct RuntimeRegistry {
    runtimes: RwLock<HashMap<String, RuntimeConstructor>>,
}

impl RuntimeRegistry {
    fn new() -> Self {
        RuntimeRegistry {
            runtimes: RwLock::new(HashMap::new()),
        }
    }

    fn register(&self, name: String, constructor: RuntimeConstructor) {
        self.runtimes.write().unwrap().insert(name, constructor);
    }

    fn create(&self, name: &str) -> Option<Arc<dyn NativeRuntime>> {
        let registry = self.runtimes.read().unwrap();
        let constructor = registry.get(name)?;
        Some(constructor())
    }

    fn list(&self) -> Vec<String> {
        self.runtimes.read().unwrap().keys().cloned().collect()
    }

    fn has(&self, name: &str) -> bool {
        self.runtimes.read().unwrap().contains_key(name)
    }
}

static GLOBAL_REGISTRY: OnceLock<RuntimeRegistry> = OnceLock::new();

fn global_registry() -> &'static RuntimeRegistry {
    GLOBAL_REGISTRY.get_or_init(RuntimeRegistry::new)
}

/// Registers a runtime by name with a constructor function.
///
/// The constructor is called each time the runtime is requested through
/// [`create_runtime`]. Runtime crates call this from an initializer.
pub fn register_runtime<F>(name: impl Into<String>, constructor: F)
where
    F: Fn() -> Arc<dyn NativeRuntime> + Send + Sync + 'static,
{
    global_registry().register(name.into(), Box::new(constructor));
}

/// Creates a runtime instance by name.
pub fn create_runtime(name: &str) -> Option<Arc<dyn NativeRuntime>> {
    global_registry().create(name)
}

/// Lists all registered runtime names.
pub fn list_runtimes() -> Vec<String> {
    global_registry().list()
}

/// Checks whether a runtime with the given name is registered.
pub fn has_runtime(name: &str) -> bool {
    global_registry().has(name)
}

const RUNTIME_ENV: &str = "TENSORRS_RUNTIME";
const DEFAULT_RUNTIME: &str = "heap";

static ACTIVE_RUNTIME: OnceLock<Arc<dyn NativeRuntime>> = OnceLock::new();

/// Resolves the process-wide default runtime.
///
/// The name comes from `TENSORRS_RUNTIME` when set, falling back to "heap".
/// The resolved instance is cached for the remainder of the process.
pub fn active_runtime() -> TensorResult<Arc<dyn NativeRuntime>> {
    if let Some(runtime) = ACTIVE_RUNTIME.get() {
        return Ok(Arc::clone(runtime));
    }
    let name = match env::var(RUNTIME_ENV) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => DEFAULT_RUNTIME.to_string(),
    };
    let runtime = create_runtime(&name).ok_or_else(|| TensorError::RuntimeUnavailable {
        name: name.clone(),
        available: list_runtimes(),
    })?;
    Ok(Arc::clone(ACTIVE_RUNTIME.get_or_init(|| runtime)))
}

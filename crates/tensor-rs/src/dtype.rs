//! Dtype descriptors and the global registry consumed by allocation runtimes.
//!
//! A [`DataType`] binds a logical tensor type to its native representation:
//! element name, stable numeric code, element byte width, and the mapping
//! function that turns a native buffer plus shape into a dense read view.
//! Runtimes never see the typed form; they resolve codes into the erased
//! [`DTypeDescriptor`] through the registry.

use crate::buffer::{NativeBuffer, TensorData};
use crate::error::TensorResult;
use crate::ndarray::DenseView;
use crate::shape::Shape;
use crate::storage::StorageElement;
use crate::types::{TFloat32, TInt32, TensorType};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Typed descriptor binding a tensor type to its native representation.
pub struct DataType<T: TensorType> {
    name: &'static str,
    code: u32,
    byte_size: usize,
    mapper: fn(&NativeBuffer, Shape) -> TensorResult<DenseView<T::Elem>>,
}

impl<T: TensorType> DataType<T> {
    /// Builds a descriptor from its registration contract: element name,
    /// stable numeric code, element byte width, and buffer-mapping callback.
    pub const fn create(
        name: &'static str,
        code: u32,
        byte_size: usize,
        mapper: fn(&NativeBuffer, Shape) -> TensorResult<DenseView<T::Elem>>,
    ) -> Self {
        DataType {
            name,
            code,
            byte_size,
            mapper,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Maps a native buffer into a typed dense view through the registered
    /// callback. The view aliases the buffer's storage.
    pub fn map(&self, buffer: &NativeBuffer, shape: Shape) -> TensorResult<DenseView<T::Elem>> {
        (self.mapper)(buffer, shape)
    }

    /// Produces the type-erased form consumed by allocation runtimes.
    pub fn descriptor(&self) -> DTypeDescriptor {
        DTypeDescriptor {
            name: self.name,
            code: self.code,
            byte_size: self.byte_size,
            alloc_zeroed: <T::Elem as StorageElement>::alloc_zeroed,
        }
    }
}

/// Type-erased dtype descriptor stored in the global registry.
#[derive(Clone, Copy, Debug)]
pub struct DTypeDescriptor {
    name: &'static str,
    code: u32,
    byte_size: usize,
    alloc_zeroed: fn(usize) -> TensorData,
}

impl DTypeDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Allocates zero-filled storage for `len` elements of this dtype.
    pub fn alloc_zeroed(&self, len: usize) -> TensorData {
        (self.alloc_zeroed)(len)
    }
}

struct DTypeRegistry {
    by_code: RwLock<HashMap<u32, DTypeDescriptor>>,
}

impl DTypeRegistry {
    fn new() -> Self {
        DTypeRegistry {
            by_code: RwLock::new(HashMap::new()),
        }
    }

    fn insert(&self, descriptor: DTypeDescriptor) {
        self.by_code
            .write()
            .unwrap()
            .insert(descriptor.code(), descriptor);
    }

    fn lookup_code(&self, code: u32) -> Option<DTypeDescriptor> {
        self.by_code.read().unwrap().get(&code).copied()
    }

    fn lookup_name(&self, name: &str) -> Option<DTypeDescriptor> {
        self.by_code
            .read()
            .unwrap()
            .values()
            .find(|descriptor| descriptor.name() == name)
            .copied()
    }

    fn list(&self) -> Vec<DTypeDescriptor> {
        self.by_code.read().unwrap().values().copied().collect()
    }
}

static GLOBAL_REGISTRY: OnceLock<DTypeRegistry> = OnceLock::new();

fn global_registry() -> &'static DTypeRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let registry = DTypeRegistry::new();
        registry.insert(TFloat32::dtype().descriptor());
        registry.insert(TInt32::dtype().descriptor());
        registry
    })
}

/// Registers a dtype descriptor, replacing any previous entry for its code.
///
/// Built-in descriptors are installed on first registry access; external
/// crates can add further dtypes through this entry point.
pub fn register_dtype(descriptor: DTypeDescriptor) {
    global_registry().insert(descriptor);
}

/// Resolves a dtype descriptor by its stable numeric code.
pub fn lookup_code(code: u32) -> Option<DTypeDescriptor> {
    global_registry().lookup_code(code)
}

/// Resolves a dtype descriptor by its element name.
pub fn lookup_name(name: &str) -> Option<DTypeDescriptor> {
    global_registry().lookup_name(name)
}

/// Lists all registered dtype descriptors.
pub fn list_dtypes() -> Vec<DTypeDescriptor> {
    global_registry().list()
}

//! Tensor type families.

use crate::dtype::DataType;
use crate::storage::StorageElement;

/// Ties a tensor type tag to its storage element and dtype descriptor.
pub trait TensorType: Sized + 'static {
    /// Scalar element stored by tensors of this type.
    type Elem: StorageElement;

    /// Returns the descriptor registered for this tensor type.
    fn dtype() -> &'static DataType<Self>;
}

/// Marker for numeric tensor types.
pub trait TNumber: TensorType {}

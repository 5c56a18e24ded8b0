//! Defines the scalar element trait implemented by tensor storages.

use crate::buffer::TensorData;
use std::fmt;
use std::sync::Arc;

/// Trait describing the behaviour required from tensor storage scalars.
///
/// Implementations bridge typed views to the shared [`TensorData`] variants
/// and provide the little-endian byte conversions used by persistence.
pub trait StorageElement:
    Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Storage width of one element in bytes.
    const BYTE_SIZE: usize;

    /// Returns the additive identity for the element type.
    fn zero() -> Self;
    /// Converts from a 32-bit float into this element type.
    fn from_f32(v: f32) -> Self;
    /// Converts the element into a 32-bit float for interoperability.
    fn to_f32(self) -> f32;

    /// Wraps shared element storage in the matching [`TensorData`] variant.
    fn wrap(values: Arc<[Self]>) -> TensorData;
    /// Clones out the shared storage when the variant matches.
    fn clone_arc(data: &TensorData) -> Option<Arc<[Self]>>;
    /// Allocates zero-filled storage for `len` elements.
    fn alloc_zeroed(len: usize) -> TensorData;

    /// Appends the little-endian encoding of the element.
    ///
    /// `read_le` expects exactly [`Self::BYTE_SIZE`] bytes.
    fn write_le(self, out: &mut Vec<u8>);
    fn read_le(bytes: &[u8]) -> Self;
}

impl StorageElement for f32 {
    const BYTE_SIZE: usize = 4;

    fn zero() -> Self {
        0.0
    }

    fn from_f32(v: f32) -> Self {
        v
    }

    fn to_f32(self) -> f32 {
        self
    }

    fn wrap(values: Arc<[Self]>) -> TensorData {
        TensorData::F32(values)
    }

    fn clone_arc(data: &TensorData) -> Option<Arc<[Self]>> {
        match data {
            TensorData::F32(values) => Some(Arc::clone(values)),
            _ => None,
        }
    }

    fn alloc_zeroed(len: usize) -> TensorData {
        TensorData::F32(vec![0.0; len].into())
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl StorageElement for i32 {
    const BYTE_SIZE: usize = 4;

    fn zero() -> Self {
        0
    }

    fn from_f32(v: f32) -> Self {
        v as i32
    }

    fn to_f32(self) -> f32 {
        self as f32
    }

    fn wrap(values: Arc<[Self]>) -> TensorData {
        TensorData::I32(values)
    }

    fn clone_arc(data: &TensorData) -> Option<Arc<[Self]>> {
        match data {
            TensorData::I32(values) => Some(Arc::clone(values)),
            _ => None,
        }
    }

    fn alloc_zeroed(len: usize) -> TensorData {
        TensorData::I32(vec![0; len].into())
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

//! Typed tensor tags and their allocation factories.

mod family;
mod tfloat32;
mod tint32;

pub use family::{TNumber, TensorType};
pub use tfloat32::TFloat32;
pub use tint32::TInt32;

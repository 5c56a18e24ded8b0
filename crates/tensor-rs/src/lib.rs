pub mod buffer;
pub mod dtype;
pub mod error;
pub mod io;
pub mod ndarray;
pub mod runtime;
pub mod shape;
pub mod storage;
pub mod tensor;
pub mod types;

pub use error::{TensorError, TensorResult};
pub use ndarray::{DenseNdArray, DenseView};
pub use shape::Shape;
pub use tensor::Tensor;
pub use types::{TFloat32, TInt32, TNumber, TensorType};

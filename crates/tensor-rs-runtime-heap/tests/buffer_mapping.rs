use std::sync::Arc;
use tensor_rs::buffer::{BufferSpec, TensorData};
use tensor_rs::error::TensorError;
use tensor_rs::runtime::{NativeRuntime, TensorInit};
use tensor_rs::shape::Shape;
use tensor_rs::tensor::Tensor;
use tensor_rs::types::{TFloat32, TInt32};
use tensor_rs_runtime_heap::{register_heap_runtime, HeapRuntime};

#[test]
fn wrapped_buffer_aliases_source_storage() {
    register_heap_runtime();
    let source = TFloat32::vector_of(&[1.0, 2.0, 3.0, 4.0])
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));

    let wrapped = Tensor::<TFloat32>::wrap(source.buffer().clone(), Shape::of([4]))
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));

    assert_eq!(wrapped.shape().dims(), &[4]);
    assert_eq!(wrapped.to_vec(), source.to_vec());
    assert!(Arc::ptr_eq(
        source.view().data_arc(),
        wrapped.view().data_arc()
    ));
}

#[test]
fn wrap_reshapes_without_copying() {
    register_heap_runtime();
    let source = TFloat32::vector_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));

    let wrapped = Tensor::<TFloat32>::wrap(source.buffer().clone(), Shape::of([2, 3]))
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));

    assert_eq!(wrapped.rank(), 2);
    assert_eq!(wrapped.get(&[1, 0]).unwrap_or_else(|err| panic!("{err}")), 4.0);
    assert!(Arc::ptr_eq(
        source.view().data_arc(),
        wrapped.view().data_arc()
    ));
}

#[test]
fn wrap_rejects_element_count_mismatch() {
    register_heap_runtime();
    let source =
        TFloat32::vector_of(&[1.0, 2.0]).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    let err = Tensor::<TFloat32>::wrap(source.buffer().clone(), Shape::of([3]))
        .expect_err("mismatched wrap shape should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn wrap_rejects_foreign_dtype_code() {
    register_heap_runtime();
    let source =
        TInt32::vector_of(&[1, 2, 3]).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    let err = Tensor::<TFloat32>::wrap(source.buffer().clone(), Shape::of([3]))
        .expect_err("INT32 buffer must not map as FLOAT");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn runtime_materializes_zero_filled_buffers() {
    let runtime = HeapRuntime::new();
    let buffer = runtime
        .materialize(TensorInit::Zeroed(BufferSpec::new(1, 6)))
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(buffer.spec().num_elements(), 6);
    assert_eq!(buffer.data().element_count(), 6);
}

#[test]
fn adopt_rejects_element_count_mismatch() {
    let runtime = HeapRuntime::new();
    let data = TensorData::F32(vec![0.0; 3].into());
    let err = runtime
        .materialize(TensorInit::Adopt(BufferSpec::new(1, 4), data))
        .expect_err("adopting mismatched storage should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn unknown_dtype_code_is_rejected() {
    let runtime = HeapRuntime::new();
    let err = runtime
        .materialize(TensorInit::Zeroed(BufferSpec::new(77, 3)))
        .expect_err("unregistered dtype code should be rejected");
    assert!(matches!(err, TensorError::UnknownDType { code: 77 }));
}

#[test]
fn active_runtime_resolves_the_heap_default() {
    register_heap_runtime();
    let runtime =
        tensor_rs::runtime::active_runtime().unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(runtime.runtime_name(), "heap");
    assert!(tensor_rs::runtime::has_runtime("heap"));
    assert!(tensor_rs::runtime::list_runtimes().contains(&"heap".to_string()));
}

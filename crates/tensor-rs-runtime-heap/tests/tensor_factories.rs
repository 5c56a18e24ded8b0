use tensor_rs::error::TensorError;
use tensor_rs::ndarray::DenseNdArray;
use tensor_rs::shape::Shape;
use tensor_rs::types::{TFloat32, TInt32};
use tensor_rs_runtime_heap::register_heap_runtime;

#[test]
fn scalar_tensor_holds_single_value() {
    register_heap_runtime();
    let tensor = TFloat32::scalar_of(4.25).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.rank(), 0);
    assert!(tensor.shape().is_scalar());
    assert_eq!(tensor.num_elements(), 1);
    assert_eq!(
        tensor.scalar().unwrap_or_else(|err| panic!("{err}")),
        4.25
    );
}

#[test]
fn vector_tensor_preserves_contents() {
    register_heap_runtime();
    let values = [1.0f32, 2.0, 3.0, 4.0];
    let tensor =
        TFloat32::vector_of(&values).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.rank(), 1);
    assert_eq!(tensor.shape().dims(), &[4]);
    assert_eq!(tensor.to_vec(), values.to_vec());
}

#[test]
fn shaped_tensor_is_zero_filled() {
    register_heap_runtime();
    let tensor = TFloat32::tensor_of(Shape::of([2, 3]))
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.shape().dims(), &[2, 3]);
    assert!(tensor.data().iter().all(|&v| v == 0.0));
}

#[test]
fn slice_length_mismatch_fails_before_allocation() {
    register_heap_runtime();
    let err = TFloat32::tensor_of_slice(Shape::of([2, 2]), &[1.0, 2.0, 3.0])
        .expect_err("length mismatch should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn element_count_overflow_fails_before_allocation() {
    register_heap_runtime();
    let err = TFloat32::tensor_of(Shape::of([usize::MAX, 2]))
        .expect_err("overflowing shape should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn tensor_copies_dense_array_contents() {
    register_heap_runtime();
    let mut src = DenseNdArray::from_vec(Shape::of([2, 2]), vec![1.0f32, 2.0, 3.0, 4.0])
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    let tensor =
        TFloat32::tensor_of_array(&src).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.shape().dims(), &[2, 2]);

    // mutating the source afterwards must not leak into the tensor
    src.set(&[0, 0], 9.0)
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.get(&[0, 0]).unwrap_or_else(|err| panic!("{err}")), 1.0);
}

#[test]
fn initializer_writes_through_shape_aware_indices() {
    register_heap_runtime();
    let tensor = TFloat32::tensor_of_init(Shape::of([2, 2]), |data| {
        for row in 0..2 {
            for col in 0..2 {
                data.set(&[row, col], (row * 2 + col) as f32)?;
            }
        }
        Ok(())
    })
    .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(tensor.get(&[1, 0]).unwrap_or_else(|err| panic!("{err}")), 2.0);
}

#[test]
fn int32_factories_mirror_the_float_surface() {
    register_heap_runtime();
    let tensor =
        TInt32::vector_of(&[7, -3, 11]).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(tensor.shape().dims(), &[3]);
    assert_eq!(tensor.to_vec(), vec![7, -3, 11]);

    let scalar = TInt32::scalar_of(-1).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(scalar.scalar().unwrap_or_else(|err| panic!("{err}")), -1);
}

#[test]
fn debug_output_names_dtype_and_shape() {
    register_heap_runtime();
    let tensor =
        TFloat32::vector_of(&[1.0, 2.0]).unwrap_or_else(|err| panic!("unexpected error: {err}"));
    let rendered = format!("{tensor:?}");
    assert!(rendered.contains("FLOAT"));
    assert!(rendered.contains('2'));
}

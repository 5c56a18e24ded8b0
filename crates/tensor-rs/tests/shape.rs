use tensor_rs::error::TensorError;
use tensor_rs::shape::Shape;

#[test]
fn scalar_shape_has_rank_zero_and_one_element() {
    let shape = Shape::scalar();
    assert_eq!(shape.rank(), 0);
    assert!(shape.is_scalar());
    assert_eq!(shape.num_elements(), 1);
    assert_eq!(
        shape
            .checked_num_elements()
            .unwrap_or_else(|err| panic!("unexpected error: {err}")),
        1
    );
}

#[test]
fn of_preserves_dimension_order() {
    let shape = Shape::of([2, 3, 4]);
    assert_eq!(shape.dims(), &[2, 3, 4]);
    assert_eq!(shape.rank(), 3);
    assert!(!shape.is_scalar());
    assert_eq!(shape.num_elements(), 24);
}

#[test]
fn zero_length_axis_yields_zero_elements() {
    let shape = Shape::of([4, 0, 2]);
    assert_eq!(shape.num_elements(), 0);
    assert_eq!(
        shape
            .checked_num_elements()
            .unwrap_or_else(|err| panic!("unexpected error: {err}")),
        0
    );
}

#[test]
fn contiguous_strides_are_row_major() {
    let strides = Shape::of([2, 3, 4])
        .contiguous_strides()
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert_eq!(strides, vec![12, 4, 1]);
}

#[test]
fn scalar_shape_has_no_strides() {
    let strides = Shape::scalar()
        .contiguous_strides()
        .unwrap_or_else(|err| panic!("unexpected error: {err}"));
    assert!(strides.is_empty());
}

#[test]
fn element_count_overflow_is_rejected() {
    let err = Shape::of([usize::MAX, 2])
        .checked_num_elements()
        .expect_err("overflowing element count should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

#[test]
fn stride_computation_rejects_overflow() {
    let err = Shape::of([usize::MAX, usize::MAX])
        .contiguous_strides()
        .expect_err("overflowing strides should be rejected");
    assert!(matches!(err, TensorError::InvalidArgument { .. }));
}

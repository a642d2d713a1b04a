use ballast::{address, same_reference, ArrayError, DynArray, ElemType, TypedArray};

#[test]
fn int32_push_grow_truncate_end_to_end() {
    let mut arr = DynArray::new(ElemType::Int32, 4).unwrap();
    assert_eq!(arr.class(), DynArray::CLASS);

    for v in [3i32, 1, 4, 1] {
        arr.push(Some(&v.to_ne_bytes())).unwrap();
    }
    assert_eq!(arr.count(), 4);
    assert_eq!(arr.capacity(), 4);

    arr.push(Some(&5i32.to_ne_bytes())).unwrap();
    assert_eq!(arr.count(), 5);
    assert_eq!(arr.capacity(), 8);
    for (i, v) in [3i32, 1, 4, 1, 5].iter().enumerate() {
        assert_eq!(arr.elem_bytes(i), Some(&v.to_ne_bytes()[..]));
    }

    arr.resize(2).unwrap();
    assert_eq!(arr.count(), 2);
    assert_eq!(arr.capacity(), 2);
    assert_eq!(arr.elem_bytes(0), Some(&3i32.to_ne_bytes()[..]));
    assert_eq!(arr.elem_bytes(1), Some(&1i32.to_ne_bytes()[..]));
}

#[test]
fn typed_and_raw_views_agree_on_layout() {
    let mut typed = TypedArray::<i32>::new(4).unwrap();
    for v in [10, 20, 30] {
        typed.push(v).unwrap();
    }

    let raw = typed.into_raw();
    let mut expected = Vec::new();
    for v in [10i32, 20, 30] {
        expected.extend_from_slice(&v.to_ne_bytes());
    }
    assert_eq!(raw.as_bytes(), &expected[..]);
}

#[test]
fn byte_capacity_overflow_reports_the_failed_product() {
    let err = DynArray::with_byte_capacity(16, ballast::MAX_BYTE_SIZE).unwrap_err();
    match err {
        ArrayError::CapacityOverflow { count, multiplier } => {
            assert_eq!(count, ballast::MAX_BYTE_SIZE);
            assert_eq!(multiplier, 16);
        }
        other => panic!("expected CapacityOverflow, got {other:?}"),
    }
}

#[test]
fn arrays_are_distinguishable_by_reference_and_address() {
    let a = DynArray::new(ElemType::Float64, 4).unwrap();
    let b = DynArray::new(ElemType::Float64, 4).unwrap();

    assert!(same_reference(&a, &a));
    assert!(!same_reference(&a, &b));
    assert_ne!(address(&a), address(&b));
    assert_ne!(a.data_address(), b.data_address());
}

#[test]
fn zero_fill_pushes_never_leave_stale_bytes() {
    let mut arr = DynArray::with_byte_capacity(4, 2).unwrap();
    for _ in 0..16 {
        arr.push(None).unwrap();
    }
    assert!(arr.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(arr.count(), 16);
}

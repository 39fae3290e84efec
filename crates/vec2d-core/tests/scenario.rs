use serde_json::json;
use vec2d_core::math::approx_eq;
use vec2d_core::prelude::*;

#[test]
fn example_walkthrough() {
    let vect1 = Vector2D::new(2, 3);
    let vect2 = Vector2D::new(3, 5);

    assert_eq!(vect1.to_string(), "{x: 2.0, y: 3.0}");
    assert_eq!(vect2.to_string(), "{x: 3.0, y: 5.0}");
    assert_eq!((vect1 + vect2).to_string(), "{x: 5.0, y: 8.0}");
    assert_eq!((vect1 - vect2).to_string(), "{x: -1.0, y: -2.0}");
    assert_eq!((vect1 * 3).to_string(), "{x: 6.0, y: 9.0}");
    assert_eq!(3 * vect1, Vector2D::new(6, 9));
    assert!(vect1 != vect2);
    assert!(approx_eq(vect1.mag(), 3.605551275463989));

    let unit = vect1.unit().unwrap();
    assert!(approx_eq(unit.x(), 0.5547001962252291));
    assert!(approx_eq(unit.y(), 0.8320502943378437));

    assert_eq!(vect1.dot(&vect2), 21.0);
    assert!(approx_eq(vect1.angle(&vect2).unwrap(), 0.04758310327698479));
}

#[test]
fn untyped_input_is_validated() {
    let v = Vector2D::from_json(&json!(2), &json!(3)).unwrap();
    assert_eq!(v, Vector2D::new(2, 3));

    assert!(matches!(
        Vector2D::from_json(&json!("two"), &json!(3)),
        Err(VectorError::InvalidArgument { axis: Axis::X, .. })
    ));
    assert!(matches!(
        v.try_add(5),
        Err(VectorError::InvalidOperand {
            operation: Operation::Add,
            ..
        })
    ));
    assert!(matches!(
        v.try_dot("x"),
        Err(VectorError::InvalidOperand {
            operation: Operation::Dot,
            ..
        })
    ));
}

#[test]
fn degenerate_vectors() {
    let zero = Vector2D::new(0, 0);
    assert_eq!(
        zero.unit(),
        Err(VectorError::DegenerateVector(Degeneracy::NoUnitVector))
    );
    assert_eq!(
        Vector2D::new(1, 1).angle(&zero),
        Err(VectorError::DegenerateVector(Degeneracy::NoAngle))
    );
}

#[test]
fn vectors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Vector2D>();

    let handles: Vec<_> = (1..=4)
        .map(|i| std::thread::spawn(move || Vector2D::new(i, i) * 2))
        .collect();
    for (i, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap(), Vector2D::new(2 * i, 2 * i));
    }
}

use approx::assert_relative_eq;
use koch::{KochError, Point, Polyline, assemble, base_triangle, subdivide};

#[test]
fn subdivide_endpoints_are_exact() {
    let p1 = Point::new(0.1, 0.2);
    let p2 = Point::new(-7.3, 11.9);
    for order in 0..=7 {
        let curve = subdivide(p1, p2, order).unwrap();
        assert_eq!(curve.first(), Some(p1));
        assert_eq!(curve.last(), Some(p2));
        assert_eq!(curve.len(), 4usize.pow(order as u32) + 1);
    }
}

#[test]
fn curve_stays_near_its_chord() {
    // Along the x axis the curve never leaves [0, 3] horizontally
    // and never rises further than chord·√3/6 from it.
    let curve = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 6).unwrap();
    let reach = 3.0 * 3.0f64.sqrt() / 6.0 + 1e-9;
    for p in curve.iter() {
        assert!(p.x >= -1e-9 && p.x <= 3.0 + 1e-9, "x out of range: {:?}", p);
        assert!(p.y <= 1e-9, "bump on the wrong side: {:?}", p);
        assert!(p.y.abs() <= reach, "too far from chord: {:?}", p);
    }
}

#[test]
fn concrete_order_one_curve() {
    let pts = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 1)
        .unwrap()
        .into_points();
    let expected = [
        (0.0, 0.0),
        (1.0, 0.0),
        (1.5, -0.8660254037844386),
        (2.0, 0.0),
        (3.0, 0.0),
    ];
    assert_eq!(pts.len(), expected.len());
    for (p, (x, y)) in pts.iter().zip(expected) {
        assert_relative_eq!(p.x, x, epsilon = 1e-12);
        assert_relative_eq!(p.y, y, epsilon = 1e-12);
    }
}

#[test]
fn snowflake_counts_and_closure() {
    for order in 0..=6 {
        let flake = assemble(order, 300.0).unwrap();
        assert_eq!(flake.len(), 3 * 4usize.pow(order as u32) + 1);
        assert_eq!(flake.first(), flake.last());
    }
}

#[test]
fn order_zero_snowflake_is_the_triangle() {
    let flake = assemble(0, 300.0).unwrap().into_points();
    let h = 300.0 * 3.0f64.sqrt() / 2.0;
    assert_eq!(
        flake,
        vec![
            Point::new(0.0, h * 2.0 / 3.0),
            Point::new(-150.0, -h / 3.0),
            Point::new(150.0, -h / 3.0),
            Point::new(0.0, h * 2.0 / 3.0),
        ]
    );
    assert_eq!(&flake[..3], &base_triangle(300.0));
}

#[test]
fn snowflake_is_deterministic() {
    let a = assemble(5, 123.4).unwrap();
    let b = assemble(5, 123.4).unwrap();
    let bits = |p: &Point| (p.x.to_bits(), p.y.to_bits());
    assert!(a.iter().map(bits).eq(b.iter().map(bits)));
}

#[test]
fn snowflake_perimeter_grows_by_four_thirds() {
    for order in 0..=5 {
        let flake = assemble(order, 60.0).unwrap();
        assert_relative_eq!(
            flake.perimeter(),
            180.0 * (4.0f64 / 3.0).powi(order),
            max_relative = 1e-9
        );
    }
}

#[test]
fn snowflake_bounds_are_centred() {
    let flake = assemble(4, 300.0).unwrap();
    let b = flake.bounds().unwrap();
    assert_relative_eq!(b.min.x, -b.max.x, epsilon = 1e-9);
    assert_relative_eq!(b.min.y, -b.max.y, epsilon = 1e-9);
}

#[test]
fn invalid_parameters() {
    let p = Point::new(1.0, 1.0);
    assert!(matches!(
        subdivide(p, Point::ORIGIN, -1),
        Err(KochError::InvalidParameter { .. })
    ));
    assert!(matches!(
        assemble(-1, 300.0),
        Err(KochError::InvalidParameter { .. })
    ));
    assert!(matches!(
        assemble(2, 0.0),
        Err(KochError::InvalidParameter { .. })
    ));
    assert!(matches!(
        assemble(2, -5.0),
        Err(KochError::InvalidParameter { .. })
    ));
}

#[test]
fn points_serialize_as_objects() {
    let curve = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 0).unwrap();
    let json = serde_json::to_string(&curve).unwrap();
    assert_eq!(json, r#"[{"x":0.0,"y":0.0},{"x":3.0,"y":0.0}]"#);
}

use super::*;
use crate::error::LayoutError;
use nalgebra::{vector, Vector2};

fn square(side: f64) -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![side, 0.0],
        vector![side, side],
        vector![0.0, side],
    ]
}

/// Outline with a rectangular notch cut into the top edge (control booth).
fn notched() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![40.0, 0.0],
        vector![40.0, 30.0],
        vector![60.0, 30.0],
        vector![60.0, 0.0],
        vector![100.0, 0.0],
        vector![100.0, 100.0],
        vector![0.0, 100.0],
    ]
}

#[test]
fn point_in_polygon_square_and_notch() {
    let sq = square(10.0);
    assert!(point_in_polygon(vector![5.0, 5.0], &sq));
    assert!(!point_in_polygon(vector![15.0, 5.0], &sq));
    assert!(!point_in_polygon(vector![-0.1, 5.0], &sq));

    let n = notched();
    assert!(point_in_polygon(vector![20.0, 10.0], &n));
    assert!(!point_in_polygon(vector![50.0, 10.0], &n), "inside the notch");
    assert!(point_in_polygon(vector![50.0, 50.0], &n));
}

#[test]
fn point_in_polygon_short_input_is_outside() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert!(!point_in_polygon(vector![0.5, 0.5], &two));
}

#[test]
fn bounds_of_notched_outline() {
    let b = polygon_bounds(&notched());
    assert_eq!(
        b,
        Bounds2 {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 100.0
        }
    );
    assert_eq!(b.inset_x(0.1), (10.0, 90.0));
}

#[test]
fn lerp_checks_parameter() {
    let a = vector![0.0, 0.0];
    let b = vector![10.0, -4.0];
    assert_eq!(lerp(a, b, 0.0).unwrap(), a);
    assert_eq!(lerp(a, b, 1.0).unwrap(), b);
    assert_eq!(lerp(a, b, 0.5).unwrap(), vector![5.0, -2.0]);
    assert!(matches!(
        lerp(a, b, 1.5),
        Err(LayoutError::InvalidArgument { .. })
    ));
    assert!(lerp(a, b, -0.01).is_err());
    assert!(lerp(a, b, f64::NAN).is_err());
}

#[test]
fn edge_list_wraps_around() {
    let sq = square(1.0);
    let edges = edge_list(&sq);
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (sq[3], sq[0]));
}

#[test]
fn polygon_validation() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert!(matches!(
        Polygon::new(two),
        Err(LayoutError::MalformedPolygon { .. })
    ));
    let collinear = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert!(Polygon::new(collinear).is_err());
    let nan = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0], vector![2.0, 0.0]];
    assert!(Polygon::new(nan).is_err());

    let p = Polygon::new(square(2.0)).unwrap();
    assert_eq!(p.len(), 4);
    assert!((p.area() - 4.0).abs() < 1e-12);
    assert!(p.is_convex());
}

#[test]
fn notch_breaks_convexity() {
    assert!(!is_convex(&notched()));
    assert!(is_convex(&square(3.0)));
}

#[test]
fn canvas_point_round_trip_and_rounding() {
    let p = CanvasPoint::new(1.23456, -7.891);
    let v: Vector2<f64> = p.into();
    assert_eq!(CanvasPoint::from(v), p);
    let r = p.rounded(2);
    assert_eq!(r, CanvasPoint::new(1.23, -7.89));
}

#[test]
fn hull_of_square_with_interior_point() {
    let mut pts = square(1.0);
    pts.push(vector![0.5, 0.5]);
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(signed_area(&hull) > 0.0);
}

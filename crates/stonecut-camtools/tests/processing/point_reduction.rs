//! Point stream reduction properties.

use proptest::prelude::*;
use stonecut_camtools::PointReducer;
use stonecut_core::Point;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn arb_points() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 0..60)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

#[test]
fn test_duplicates_and_jitter_collapse() {
    let reducer = PointReducer::default();
    let reduced = reducer.reduce(&pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.05), (10.0, 0.0)]));
    assert_eq!(reduced, pts(&[(0.0, 0.0), (10.0, 0.0)]));
}

#[test]
fn test_closed_loop_keeps_closing_point() {
    // A traced square: the closing point is far from its predecessor.
    let reducer = PointReducer::default();
    let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    assert_eq!(reducer.reduce(&input), input);
}

#[test]
fn test_configurable_min_distance() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
    let reduced = PointReducer::new(0.1, 2.0).reduce(&input);
    assert_eq!(reduced, pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]));
}

proptest! {
    #[test]
    fn reduction_is_idempotent(points in arb_points()) {
        let reducer = PointReducer::default();
        let once = reducer.reduce(&points);
        let twice = reducer.reduce(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reduction_keeps_first_point_and_order(points in arb_points()) {
        let reducer = PointReducer::default();
        let reduced = reducer.reduce(&points);

        prop_assert_eq!(reduced.first(), points.first());
        prop_assert!(reduced.len() <= points.len());

        // Output is a subsequence of the input.
        let mut cursor = points.iter();
        for p in &reduced {
            prop_assert!(cursor.any(|q| q == p));
        }
    }

    #[test]
    fn kept_points_respect_min_distance(points in arb_points()) {
        let reducer = PointReducer::default();
        let reduced = reducer.reduce(&points);
        for pair in reduced.windows(2) {
            prop_assert!(pair[0].distance_to(&pair[1]) >= reducer.min_distance);
        }
    }
}

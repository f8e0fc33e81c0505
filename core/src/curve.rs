use std::f64::consts::FRAC_PI_3;

use serde::Serialize;

use crate::error::Result;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::utils::{MAX_ORDER, curve_point_count, validate_order};

// The middle third is rotated clockwise, so the bump sits on the right of
// the direction of travel. That is outward for counter-clockwise polygons.
pub(crate) const BUMP_ANGLE: f64 = -FRAC_PI_3;

// Koch curve between two endpoints: 4^n + 1 points, starting and ending
// exactly on the endpoints it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Curve(Vec<Point>);

impl Curve {
    // Build the curve for an already validated order.
    pub(crate) fn build(p1: Point, p2: Point, order: u32) -> Self {
        let mut points = Vec::with_capacity(curve_point_count(order).unwrap_or_default());
        push_segment(&mut points, p1, p2, order);
        points.push(p2);
        Curve(points)
    }

    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn end(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    // Straight-line distance between the endpoints.
    pub fn chord(&self) -> f64 {
        self.start().distance(self.end())
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl Polyline for Curve {
    fn points(&self) -> &[Point] {
        &self.0
    }
}

impl IntoIterator for Curve {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// Koch curve of the given order from `p1` to `p2`.
// Fails with InvalidParameter for a negative order and NumericOverflow
// above MAX_ORDER, before any point is computed.
pub fn subdivide(p1: Point, p2: Point, order: i32) -> Result<Curve> {
    let order = validate_order(order, MAX_ORDER)?;
    Ok(Curve::build(p1, p2, order))
}

// Append the order-`order` curve from p1 to p2 to `out`, without p2 itself.
// Consecutive sub-curves share an endpoint, so leaving it off lets the
// next call (or the caller) supply it exactly once.
pub(crate) fn push_segment(out: &mut Vec<Point>, p1: Point, p2: Point, order: u32) {
    if order == 0 {
        out.push(p1);
        return;
    }

    let third = (p2 - p1) / 3.0;
    let b = p1 + third;
    // Rotated offset is summed before it is added to b, so c can differ
    // from a left-to-right `b.x + dx·cos − dy·sin` in the last bit.
    let c = b + third.rotate(BUMP_ANGLE);
    let d = p1 + third * 2.0;

    push_segment(out, p1, b, order - 1);
    push_segment(out, b, c, order - 1);
    push_segment(out, c, d, order - 1);
    push_segment(out, d, p2, order - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KochError;
    use approx::assert_relative_eq;

    #[test]
    fn order_zero_is_the_segment() {
        let c = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 0).unwrap();
        assert_eq!(
            c.points(),
            &[Point::new(0.0, 0.0), Point::new(3.0, 0.0)]
        );
    }

    #[test]
    fn order_one_bumps_below_a_rightward_segment() {
        let c = subdivide(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 1).unwrap();
        let pts = c.points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert_eq!(pts[1], Point::new(1.0, 0.0));
        assert_relative_eq!(pts[2].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(pts[2].y, -(3.0f64.sqrt() / 2.0), epsilon = 1e-12);
        assert_eq!(pts[3], Point::new(2.0, 0.0));
        assert_eq!(pts[4], Point::new(3.0, 0.0));
    }

    #[test]
    fn endpoints_and_counts() {
        let a = Point::new(-1.25, 7.5);
        let b = Point::new(13.0, -2.1);
        for order in 0..=6 {
            let c = subdivide(a, b, order).unwrap();
            assert_eq!(c.len(), 4usize.pow(order as u32) + 1);
            assert_eq!(c.start(), a);
            assert_eq!(c.end(), b);
        }
    }

    #[test]
    fn length_grows_by_four_thirds() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        for order in 0..=5 {
            let c = subdivide(a, b, order).unwrap();
            let expected = 50.0 * (4.0f64 / 3.0).powi(order);
            assert_relative_eq!(c.length(), expected, max_relative = 1e-9);
            assert_relative_eq!(c.chord(), 50.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn negative_order_rejected() {
        let err = subdivide(Point::ORIGIN, Point::new(1.0, 0.0), -1).unwrap_err();
        assert!(matches!(err, KochError::InvalidParameter { name: "order", .. }));
    }

    #[test]
    fn order_above_max_rejected() {
        let too_high = MAX_ORDER as i32 + 1;
        let err = subdivide(Point::ORIGIN, Point::new(1.0, 0.0), too_high).unwrap_err();
        assert_eq!(
            err,
            KochError::NumericOverflow {
                order: MAX_ORDER + 1,
                max: MAX_ORDER
            }
        );
    }

    #[test]
    fn into_points_keeps_order() {
        let c = subdivide(Point::ORIGIN, Point::new(9.0, 0.0), 2).unwrap();
        let copy = c.points().to_vec();
        assert_eq!(c.clone().into_points(), copy);
        assert_eq!(c.into_iter().collect::<Vec<_>>(), copy);
    }
}

use serde::Serialize;

use crate::curve::push_segment;
use crate::error::{KochError, Result};
use crate::point::Point;
use crate::polyline::Polyline;
use crate::utils::{MAX_ORDER, point_count, validate_order, validate_size};

// Direction a triangle's vertices are listed in, from the sign of its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

impl Winding {
    pub fn of(vertices: &[Point; 3]) -> Self {
        let [a, b, c] = *vertices;
        let doubled_area = (b - a).cross(c - a);
        if doubled_area > 0.0 {
            Winding::CounterClockwise
        } else if doubled_area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}

// Closed Koch polygon: 3·4^n + 1 points, the last one a copy of the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snowflake(Vec<Point>);

impl Snowflake {
    // Subdivide the three edges of a counter-clockwise triangle.
    // Order and winding must already be validated.
    pub(crate) fn build(vertices: [Point; 3], order: u32) -> Self {
        let mut points = Vec::with_capacity(point_count(order).unwrap_or_default());
        for i in 0..3 {
            push_segment(&mut points, vertices[i], vertices[(i + 1) % 3], order);
        }
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Snowflake(points)
    }

    pub fn perimeter(&self) -> f64 {
        self.length()
    }

    // Shoelace area; positive because the outline runs counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].cross(w[1])).sum::<f64>() / 2.0
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl Polyline for Snowflake {
    fn points(&self) -> &[Point] {
        &self.0
    }
}

impl IntoIterator for Snowflake {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// Upward-pointing equilateral triangle with edge `size`, listed
// counter-clockwise: apex, bottom left, bottom right.
pub fn base_triangle(size: f64) -> [Point; 3] {
    let h = size * 3.0f64.sqrt() / 2.0;
    [
        Point::new(0.0, h * 2.0 / 3.0),
        Point::new(-size / 2.0, -h / 3.0),
        Point::new(size / 2.0, -h / 3.0),
    ]
}

// Koch snowflake of the given order on the base triangle of edge `size`.
pub fn assemble(order: i32, size: f64) -> Result<Snowflake> {
    let size = validate_size(size)?;
    assemble_from_triangle(base_triangle(size), order)
}

// Koch snowflake grown from an arbitrary triangle.
// Bumps are always placed on the right of each edge, so only
// counter-clockwise triangles produce an outward snowflake; anything else
// is rejected rather than folded inwards.
pub fn assemble_from_triangle(vertices: [Point; 3], order: i32) -> Result<Snowflake> {
    let order = validate_order(order, MAX_ORDER)?;
    check_triangle(&vertices)?;
    Ok(Snowflake::build(vertices, order))
}

pub(crate) fn check_triangle(vertices: &[Point; 3]) -> Result<()> {
    if !vertices.iter().all(|p| p.is_finite()) {
        return Err(KochError::invalid("vertices", "coordinates must be finite"));
    }
    match Winding::of(vertices) {
        Winding::CounterClockwise => Ok(()),
        Winding::Clockwise => Err(KochError::invalid(
            "vertices",
            "triangle is wound clockwise; list the vertices counter-clockwise",
        )),
        Winding::Degenerate => Err(KochError::invalid("vertices", "triangle has zero area")),
    }
}

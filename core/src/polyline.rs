use crate::point::Point;

// Axis-aligned bounding box of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

// An ordered sequence of points read as a polyline.
// Implementors only provide `points()`; everything else derives from it.
pub trait Polyline {
    fn points(&self) -> &[Point];

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    fn first(&self) -> Option<Point> {
        self.points().first().copied()
    }

    fn last(&self) -> Option<Point> {
        self.points().last().copied()
    }

    fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points().iter()
    }

    // Sum of the segment lengths between consecutive points.
    fn length(&self) -> f64 {
        self.points().windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    // Split into x and y columns, the shape plotting libraries expect.
    fn unzip(&self) -> (Vec<f64>, Vec<f64>) {
        self.points().iter().map(|p| (p.x, p.y)).unzip()
    }

    fn bounds(&self) -> Option<Bounds> {
        let (&head, tail) = self.points().split_first()?;
        let init = Bounds {
            min: head,
            max: head,
        };
        Some(tail.iter().fold(init, |b, p| Bounds {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }
}

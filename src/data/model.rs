use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Point – one row of the source table
// ---------------------------------------------------------------------------

/// A single (x, y) pair. Extra source columns are dropped on deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds – axis-aligned extent of the finite points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// ---------------------------------------------------------------------------
// PointDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Points in source row order. x and y always have the same length because
/// they are stored as pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointDataset {
    points: Vec<Point>,
}

impl PointDataset {
    pub fn from_points(points: Vec<Point>) -> Self {
        PointDataset { points }
    }

    /// Number of points (rows).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Extent of the finite points, `None` if there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut finite = self.points.iter().filter(|p| p.is_finite());
        let first = finite.next()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(finite.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

impl FromIterator<Point> for PointDataset {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointDataset::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_non_finite_points() {
        let ds: PointDataset = [(1.0, -2.0), (f64::NAN, 100.0), (-3.0, 4.0), (0.5, f64::INFINITY)]
            .into_iter()
            .map(Point::from)
            .collect();
        let b = ds.bounds().unwrap();
        assert_eq!(b, Bounds { min_x: -3.0, max_x: 1.0, min_y: -2.0, max_y: 4.0 });
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = PointDataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.bounds(), None);
    }

    #[test]
    fn order_is_kept() {
        let ds: PointDataset = [(2.0, 4.0), (0.0, 0.0), (1.0, 1.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(ds.xs().collect::<Vec<_>>(), vec![2.0, 0.0, 1.0]);
        assert_eq!(ds.ys().collect::<Vec<_>>(), vec![4.0, 0.0, 1.0]);
        assert_eq!(ds.get(0), Some(Point::new(2.0, 4.0)));
    }
}

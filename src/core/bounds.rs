use crate::core::geo::Point;
use crate::data::location::Location;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in warehouse floor coordinates (meters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates empty bounds (invalid bounds that can be extended)
    pub fn empty() -> Self {
        Self::new(
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }

    /// Computes the floor footprint of a set of locations.
    ///
    /// Each location contributes the rectangle spanned by its coordinate
    /// and its planar dimensions (width along x, length along y).
    pub fn from_locations<'a, I>(locations: I) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let mut bounds = Self::empty();
        for loc in locations {
            bounds.extend_bounds(&loc.footprint());
        }
        bounds
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the size as a Point
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if the bounds intersect with another bounds
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Extends the bounds to include another bounds
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.extend(&other.min);
        self.extend(&other.max);
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Checks whether either axis has zero or negative extent.
    ///
    /// Degenerate bounds cannot be fitted into a viewport.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::location::LocationKind;

    #[test]
    fn test_bounds_creation() {
        let bounds = Bounds::from_coords(10.0, 20.0, 30.0, 60.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 40.0);
        assert_eq!(bounds.center(), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::from_coords(10.0, 20.0, 30.0, 40.0);
        assert!(bounds.contains(&Point::new(15.0, 25.0)));
        assert!(!bounds.contains(&Point::new(5.0, 25.0)));
    }

    #[test]
    fn test_bounds_extend() {
        let mut bounds = Bounds::empty();
        assert!(!bounds.is_valid());

        bounds.extend(&Point::new(3.0, 4.0));
        bounds.extend(&Point::new(-1.0, 10.0));
        assert!(bounds.is_valid());
        assert_eq!(bounds.min, Point::new(-1.0, 4.0));
        assert_eq!(bounds.max, Point::new(3.0, 10.0));
    }

    #[test]
    fn test_degenerate_bounds() {
        let flat = Bounds::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(flat.is_valid());
        assert!(flat.is_degenerate());

        let solid = Bounds::from_coords(0.0, 0.0, 10.0, 1.0);
        assert!(!solid.is_degenerate());
    }

    #[test]
    fn test_footprint_from_locations() {
        let mut a = Location::new("R-01-01", LocationKind::Rack, 1.2, 0.8, 2.0);
        a.set_coord(2.0, 3.0, 0.0);
        let mut b = Location::new("R-01-02", LocationKind::Rack, 1.2, 0.8, 2.0);
        b.set_coord(6.0, 1.0, 0.0);

        let bounds = Bounds::from_locations([&a, &b]);
        assert_eq!(bounds.min, Point::new(2.0, 1.0));
        // max x = 6.0 + width, max y = 3.0 + length
        assert_eq!(bounds.max, Point::new(6.8, 4.2));
    }
}

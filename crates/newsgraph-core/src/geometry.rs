//! Geometric primitives for graph layout and rendering.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Newsgraph uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians from the +X axis. Because Y grows downward,
//! increasing angles sweep clockwise on screen.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use newsgraph_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point at `angle` radians and `radius` distance from `center`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgraph_core::geometry::Point;
    /// let center = Point::new(100.0, 100.0);
    /// let east = Point::from_polar(center, 0.0, 50.0);
    /// assert_eq!(east.x(), 150.0);
    /// assert_eq!(east.y(), 100.0);
    /// ```
    pub fn from_polar(center: Point, angle: f32, radius: f32) -> Self {
        Self {
            x: center.x + angle.cos() * radius,
            y: center.y + angle.sin() * radius,
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Angle of this point around `center`, in radians within `(-π, π]`.
    pub fn angle_from(self, center: Point) -> f32 {
        let delta = self.sub_point(center);
        delta.y.atan2(delta.x)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center point of a canvas of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Checks that both dimensions are finite and strictly positive
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle described by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a square bounds of half-extent `radius` around `center`.
    pub fn around(center: Point, radius: f32) -> Self {
        Self {
            min_x: center.x - radius,
            min_y: center.y - radius,
            max_x: center.x + radius,
            max_y: center.y + radius,
        }
    }

    /// Creates bounds covering a canvas of `size` anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: size.width,
            max_y: size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_from_polar_quadrants() {
        let center = Point::new(200.0, 150.0);

        let south = Point::from_polar(center, FRAC_PI_2, 10.0);
        assert_approx_eq!(f32, south.x(), 200.0, epsilon = 0.0001);
        assert_approx_eq!(f32, south.y(), 160.0, epsilon = 0.0001);

        let west = Point::from_polar(center, PI, 10.0);
        assert_approx_eq!(f32, west.x(), 190.0, epsilon = 0.0001);
        assert_approx_eq!(f32, west.y(), 150.0, epsilon = 0.0001);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
    }

    #[test]
    fn test_size_center() {
        let size = Size::new(400.0, 300.0);
        assert_eq!(size.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_size_is_drawable() {
        assert!(Size::new(1.0, 1.0).is_drawable());
        assert!(!Size::new(0.0, 100.0).is_drawable());
        assert!(!Size::new(100.0, -1.0).is_drawable());
        assert!(!Size::new(f32::NAN, 100.0).is_drawable());
        assert!(!Size::new(f32::INFINITY, 100.0).is_drawable());
    }

    #[test]
    fn test_bounds_merge_and_inflate() {
        let a = Bounds::around(Point::new(10.0, 10.0), 5.0);
        let b = Bounds::around(Point::new(30.0, 0.0), 5.0);
        let merged = a.merge(&b).inflate(1.0);

        assert_approx_eq!(f32, merged.min_x(), 4.0);
        assert_approx_eq!(f32, merged.min_y(), -6.0);
        assert_approx_eq!(f32, merged.max_x(), 36.0);
        assert_approx_eq!(f32, merged.max_y(), 16.0);
        assert_approx_eq!(f32, merged.width(), 32.0);
        assert_approx_eq!(f32, merged.height(), 22.0);
    }
}

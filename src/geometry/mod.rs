use geo::Centroid;
use geo_types::{MultiPoint, Point};

use crate::errors::GeometryError;

/// Cubic control points for declarative curves.
pub mod curve;

/// Vector helpers on [`geo_types::Point`]. Points and vectors share a
/// representation; `+`, `-`, scalar `*` and [`Point::dot`] come from geo_types.
///
/// Angles are radians. The coordinate space is y-down, so a positive rotation
/// turns clockwise on screen.
pub trait Vector2 {
    /// Treat the point as a vector and return its length.
    fn magnitude(&self) -> f64;

    /// Scalar distance between two points.
    fn distance(&self, other: &Point<f64>) -> f64;

    /// Rotate about the origin.
    fn rotate(&self, angle: f64) -> Point<f64>;

    /// Unit vector in the same direction. A zero vector comes back as NaNs.
    fn normalise(&self) -> Point<f64>;

    fn scale(&self, factor: f64) -> Point<f64>;
}

impl Vector2 for Point<f64> {
    fn magnitude(&self) -> f64 {
        self.x().hypot(self.y())
    }

    fn distance(&self, other: &Point<f64>) -> f64 {
        (*self - *other).magnitude()
    }

    fn rotate(&self, angle: f64) -> Point<f64> {
        let (sin, cos) = angle.sin_cos();
        Point::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    fn normalise(&self) -> Point<f64> {
        *self / self.magnitude()
    }

    fn scale(&self, factor: f64) -> Point<f64> {
        *self * factor
    }
}

/// Point at `radius` from `center` in direction `angle`.
pub fn polar_to_cartesian(center: Point<f64>, radius: f64, angle: f64) -> Point<f64> {
    let (sin, cos) = angle.sin_cos();
    center + Point::new(cos * radius, sin * radius)
}

/// Linear interpolation from `a` (proportion 0) to `b` (proportion 1).
/// Proportions outside `[0, 1]` extrapolate along the same line.
pub fn point_along(a: Point<f64>, b: Point<f64>, proportion: f64) -> Point<f64> {
    a + (b - a) * proportion
}

/// Midpoint of `a` and `b`.
pub fn midpoint(a: Point<f64>, b: Point<f64>) -> Point<f64> {
    point_along(a, b, 0.5)
}

/// Mean position of a set of points.
pub fn centroid(points: &[Point<f64>]) -> Result<Point<f64>, GeometryError> {
    MultiPoint::new(points.to_vec())
        .centroid()
        .ok_or(GeometryError::EmptyCentroid)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: Point<f64>, b: Point<f64>) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn test_magnitude_and_distance() {
        assert_eq!(Point::new(3.0, 4.0).magnitude(), 5.0);
        let d = Point::new(10.0, 0.0).distance(&Point::new(0.0, 10.0));
        assert!((d - 200f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // y is down, so +90° takes +x to +y (clockwise on screen)
        assert!(close(Point::new(1.0, 0.0).rotate(PI / 2.0), Point::new(0.0, 1.0)));
        assert!(close(Point::new(1.0, 0.0).rotate(-PI / 2.0), Point::new(0.0, -1.0)));
    }

    #[test]
    fn test_normalise() {
        let n = Point::new(0.0, -7.5).normalise();
        assert!(close(n, Point::new(0.0, -1.0)));
        let zero = Point::new(0.0, 0.0).normalise();
        assert!(zero.x().is_nan() && zero.y().is_nan());
    }

    #[test]
    fn test_operators_and_dot() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a.scale(2.0), Point::new(2.0, 4.0));
        assert_eq!(a.dot(b), 1.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(Point::new(0.5, 0.5), 0.25, PI);
        assert!(close(p, Point::new(0.25, 0.5)));
    }

    #[test]
    fn test_point_along_extrapolates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 4.0);
        assert_eq!(point_along(a, b, 0.5), Point::new(1.0, 2.0));
        assert_eq!(point_along(a, b, 1.5), Point::new(3.0, 6.0));
        assert_eq!(point_along(a, b, -0.5), Point::new(-1.0, -2.0));
        assert_eq!(midpoint(a, b), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(close(c, Point::new(0.5, 0.5)));
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyCentroid));
    }
}

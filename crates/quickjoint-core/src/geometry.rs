//! Planar vector geometry
//!
//! A [`Point`] doubles as a position and as a displacement vector. The free
//! functions here step a base point along, or perpendicular to, a guide
//! direction while ignoring the guide's own length.

use crate::error::{GeometryError, GeometryResult};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Directions shorter than this are treated as zero-length.
pub const DIRECTION_EPSILON: f64 = 1e-12;

/// A 2-D coordinate or displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin, also the zero vector.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from its polar form.
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Decompose into `(magnitude, angle)`, angle in radians from the +x axis.
    pub fn polar(&self) -> (f64, f64) {
        (self.magnitude(), self.y.atan2(self.x))
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        Vector2::from(*self).norm()
    }

    /// Dot product, used to project displacements onto an edge.
    pub fn dot(&self, other: Point) -> f64 {
        Vector2::from(*self).dot(&Vector2::from(other))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector in this direction, or `None` for a zero-length vector.
    pub fn unit(&self) -> Option<Point> {
        Vector2::from(*self)
            .try_normalize(DIRECTION_EPSILON)
            .map(Point::from)
    }

    /// Fail unless both coordinates are finite.
    pub fn ensure_finite(&self) -> GeometryResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::NonFinite {
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Euclidean norm of `v`.
pub fn magnitude(v: Point) -> f64 {
    v.magnitude()
}

/// Move `distance` from `base` along the angle of `direction`.
///
/// The magnitude of `direction` is ignored. `direction` may only be zero when
/// `distance` is also zero, otherwise the angle is undefined and
/// [`GeometryError::ZeroDirection`] is returned.
pub fn offset_along(base: Point, direction: Point, distance: f64) -> GeometryResult<Point> {
    if distance == 0.0 {
        return Ok(base);
    }
    let unit = direction
        .unit()
        .ok_or(GeometryError::ZeroDirection { distance })?;
    Ok(base + unit * distance)
}

/// Move `distance` from `base` at right angles to `direction`.
///
/// With `invert` the direction is turned +90 degrees (counter-clockwise in a
/// y-up frame), otherwise -90 degrees. The quarter turn is done by swapping
/// components so opposite calls cancel exactly.
pub fn offset_perpendicular(
    base: Point,
    direction: Point,
    distance: f64,
    invert: bool,
) -> GeometryResult<Point> {
    if distance == 0.0 {
        return Ok(base);
    }
    let unit = direction
        .unit()
        .ok_or(GeometryError::ZeroDirection { distance })?;
    let normal = if invert {
        Point::new(-unit.y, unit.x)
    } else {
        Point::new(unit.y, -unit.x)
    };
    Ok(base + normal * distance)
}

//! Geometry primitives for sketchr.
//!
//! Points and vectors are plain `glam::DVec2` values; the helpers here are the
//! handful of affine operations every shape variant is built from. Angles are
//! carried in degrees and only converted to radians at the point of use.

use std::fmt;

use glam::DVec2;

/// An absolute position in picture coordinates (y grows downward).
pub type Point = DVec2;

/// A displacement between two points.
pub type Vector = DVec2;

/// Shorthand constructor for a [`Point`].
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// Why a number was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    NaN,
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const FULL_TURN: Angle = Angle(360.0);

    /// Angle from degrees, rejecting NaN and infinities
    #[inline]
    pub fn try_new(degrees: f64) -> Result<Angle, NumericError> {
        if degrees.is_nan() {
            Err(NumericError::NaN)
        } else if degrees.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Angle(degrees))
        }
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Angle(degrees)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Rotate `p` about `center` using the standard rotation matrix.
///
/// A zero angle returns `p` untouched so that rotating by 0° is an exact identity.
pub fn rotate_about(p: Point, center: Point, angle: Angle) -> Point {
    if angle.0 == 0.0 {
        return p;
    }
    let (sin, cos) = angle.to_radians().sin_cos();
    let d = p - center;
    center + DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Isotropic scale of `p` relative to `center`: `center + (p - center) * factor`.
#[inline]
pub fn scale_about(p: Point, center: Point, factor: f64) -> Point {
    center + (p - center) * factor
}

/// Reflect `p` across the infinite line through `a` and `b`.
///
/// A degenerate line (`a == b`) has no direction, so the point is returned unchanged.
pub fn reflect_across(p: Point, a: Point, b: Point) -> Point {
    let dir = b - a;
    let len2 = dir.length_squared();
    if len2 == 0.0 {
        return p;
    }
    let t = (p - a).dot(dir) / len2;
    let proj = a + dir * t;
    proj * 2.0 - p
}

/// Even-odd ray-casting containment test over `vertices` in their stored order.
pub fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    let mut inside = false;
    let Some(mut j) = vertices.len().checked_sub(1) else {
        return false;
    };
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Arithmetic mean of a non-empty point list; the origin for an empty one.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    points.iter().copied().sum::<Point>() / points.len() as f64
}

/// Fill color carried by every shape. Alpha maps to the picture-format opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Build a color from rgb channels and a fractional opacity (clamped to `[0, 1]`).
    pub fn from_opacity(r: u8, g: u8, b: u8, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

//! Shape variants and the shared transform/query contract.
//!
//! Each variant stores an ordered list of defining points and knows how to:
//! - Transform those points (move, rotate, scale, reflect)
//! - Answer hit-tests against a point with a tolerance
//! - Describe its outline as SVG path data
//! - Accept bulk parameter assignment by name
//!
//! The set of variants is closed: [`Geometry`] is dispatched with
//! `enum_dispatch`, and everything variant-specific (the picture writer, the
//! registry) matches over it exhaustively.

mod circle;
mod line;
mod params;
mod polygon;
mod rectangle;

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::errors::{RegistryError, ShapeError};
use crate::log::warn;
use crate::path::PathData;
use crate::types::{Angle, Color, Point, Vector, centroid, reflect_across, rotate_about, scale_about};

pub use circle::Circle;
pub use line::Line;
pub use params::{Parameters, ShapeMetadata};
pub use polygon::{Hexagon, Pentagon, Triangle};
pub use rectangle::Rectangle;

/// Common behavior for all shape variants
#[enum_dispatch]
pub trait Figure {
    /// Which variant this is
    fn kind(&self) -> ShapeKind;

    /// Defining points in their stored order
    fn points(&self) -> &[Point];

    /// Mutable access to the defining points
    fn points_mut(&mut self) -> &mut [Point];

    /// Derived center; the mean of the defining points unless a variant knows better
    fn center(&self) -> Point {
        centroid(self.points())
    }

    /// Translate every defining point by `vector`
    fn move_by(&mut self, vector: Vector) {
        for p in self.points_mut() {
            *p += vector;
        }
    }

    /// Rotate every defining point about `center`
    fn rotate(&mut self, center: Point, angle: Angle) {
        for p in self.points_mut() {
            *p = rotate_about(*p, center, angle);
        }
    }

    /// Component-wise scale of every point relative to the origin
    fn scale(&mut self, dx: f64, dy: f64) {
        let factor = DVec2::new(dx, dy);
        for p in self.points_mut() {
            *p *= factor;
        }
    }

    /// Isotropic scale of every point relative to `center`
    fn scale_about(&mut self, center: Point, factor: f64) {
        for p in self.points_mut() {
            *p = scale_about(*p, center, factor);
        }
    }

    /// Reflect every point across the line through `a` and `b`
    fn reflect(&mut self, a: Point, b: Point) {
        for p in self.points_mut() {
            *p = reflect_across(*p, a, b);
        }
    }

    /// Whether `point` lies on or in the shape within `epsilon`
    fn hit_test(&self, point: Point, epsilon: f64) -> bool;

    /// Outline as SVG path data, derived from the current points
    fn outline_path(&self) -> PathData;

    /// Assign defining points and scalars by name.
    ///
    /// All declared parameters are checked before anything is assigned.
    fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError>;
}

/// The closed set of shape variants.
#[enum_dispatch(Figure)]
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
}

/// Type tag for a shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
    ];

    pub fn metadata(self) -> &'static ShapeMetadata {
        match self {
            ShapeKind::Line => &Line::METADATA,
            ShapeKind::Circle => &Circle::METADATA,
            ShapeKind::Rectangle => &Rectangle::METADATA,
            ShapeKind::Triangle => &Triangle::METADATA,
            ShapeKind::Pentagon => &Pentagon::METADATA,
            ShapeKind::Hexagon => &Hexagon::METADATA,
        }
    }

    pub fn name(self) -> &'static str {
        self.metadata().name
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RegistryError::UnknownShapeType {
                name: s.to_string(),
                known: Some(format!(
                    "known shape types: {}",
                    ShapeKind::ALL.map(ShapeKind::name).join(", ")
                )),
            })
    }
}

/// A named, colored shape as it lives in a scene.
///
/// The selection flag belongs to the scene: only [`crate::Scene`] flips it.
#[derive(Debug, PartialEq)]
pub struct Shape {
    name: String,
    selected: bool,
    color: Color,
    geometry: Geometry,
}

impl Shape {
    pub fn new(name: impl Into<String>, geometry: impl Into<Geometry>) -> Self {
        Self {
            name: name.into(),
            selected: false,
            color: Color::default(),
            geometry: geometry.into(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        if self.name != name {
            self.name = name.to_string();
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn points(&self) -> &[Point] {
        self.geometry.points()
    }

    pub fn center(&self) -> Point {
        self.geometry.center()
    }

    /// Move the shape so that its derived center lands on `center`.
    pub fn set_center(&mut self, center: Point) {
        let delta = center - self.geometry.center();
        self.geometry.move_by(delta);
    }

    pub fn move_by(&mut self, vector: Vector) {
        self.geometry.move_by(vector);
    }

    /// Rotate about `center`. A NaN or infinite angle leaves the shape unchanged.
    pub fn rotate(&mut self, center: Point, angle: impl Into<Angle>) {
        match Angle::try_new(angle.into().degrees()) {
            Ok(angle) => self.geometry.rotate(center, angle),
            Err(err) => warn!(name = %self.name, %err, "rotation ignored"),
        }
    }

    pub fn scale(&mut self, dx: f64, dy: f64) {
        self.geometry.scale(dx, dy);
    }

    pub fn scale_about(&mut self, center: Point, factor: f64) {
        self.geometry.scale_about(center, factor);
    }

    pub fn reflect(&mut self, a: Point, b: Point) {
        self.geometry.reflect(a, b);
    }

    pub fn hit_test(&self, point: Point, epsilon: f64) -> bool {
        self.geometry.hit_test(point, epsilon)
    }

    pub fn outline_path(&self) -> PathData {
        self.geometry.outline_path()
    }

    pub fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError> {
        self.geometry.set_parameters(params)
    }

    /// Deep copy with the same geometry and color, unnamed and unselected.
    ///
    /// The caller names the copy before adding it to a scene.
    pub fn duplicate(&self) -> Shape {
        Shape {
            name: String::new(),
            selected: false,
            color: self.color,
            geometry: self.geometry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    const EPS: f64 = 1e-9;

    fn samples() -> Vec<Geometry> {
        vec![
            Line::new(pt(1.0, 2.0), pt(30.0, -4.0)).into(),
            Circle::new(pt(10.0, 10.0), pt(15.0, 10.0)).into(),
            Rectangle::new(pt(0.0, 0.0), pt(10.0, 20.0)).into(),
            Triangle::new([pt(0.0, 0.0), pt(8.0, 1.0), pt(3.0, 7.0)]).into(),
            Pentagon::new([pt(0.0, 0.0), pt(4.0, -1.0), pt(7.0, 2.0), pt(5.0, 6.0), pt(1.0, 5.0)]).into(),
            Hexagon::new([
                pt(2.0, 0.0),
                pt(6.0, 0.0),
                pt(8.0, 3.0),
                pt(6.0, 6.0),
                pt(2.0, 6.0),
                pt(0.0, 3.0),
            ])
            .into(),
        ]
    }

    fn assert_points_close(a: &Geometry, b: &Geometry) {
        assert_eq!(a.points().len(), b.points().len());
        for (p, q) in a.points().iter().zip(b.points()) {
            assert!(p.distance(*q) < 1e-6, "{:?}: {p:?} != {q:?}", a.kind());
        }
    }

    #[test]
    fn move_then_inverse_restores_points() {
        for original in samples() {
            let mut g = original.clone();
            let v = DVec2::new(13.25, -7.5);
            g.move_by(v);
            g.move_by(-v);
            assert_points_close(&g, &original);
        }
    }

    #[test]
    fn rotate_then_inverse_restores_points() {
        let center = pt(3.0, -2.0);
        for original in samples() {
            let mut g = original.clone();
            g.rotate(center, Angle(37.0));
            g.rotate(center, Angle(-37.0));
            assert_points_close(&g, &original);
        }
    }

    #[test]
    fn rotate_full_turn_is_identity() {
        for original in samples() {
            let mut g = original.clone();
            g.rotate(pt(50.0, 50.0), Angle::FULL_TURN);
            assert_points_close(&g, &original);
        }
    }

    #[test]
    fn rotate_zero_is_exact_identity() {
        for original in samples() {
            let mut g = original.clone();
            g.rotate(pt(50.0, 50.0), Angle::ZERO);
            assert_eq!(g, original);
        }
    }

    #[test]
    fn scale_by_one_is_identity() {
        for original in samples() {
            let mut g = original.clone();
            g.scale_about(pt(-4.0, 9.0), 1.0);
            g.scale(1.0, 1.0);
            assert_eq!(g, original);
        }
    }

    #[test]
    fn reflect_twice_is_identity() {
        let (a, b) = (pt(-3.0, 1.0), pt(5.0, 11.0));
        for original in samples() {
            let mut g = original.clone();
            g.reflect(a, b);
            g.reflect(a, b);
            assert_points_close(&g, &original);
        }
    }

    #[test]
    fn scale_is_component_wise() {
        let mut g: Geometry = Line::new(pt(1.0, 2.0), pt(3.0, 4.0)).into();
        g.scale(2.0, 3.0);
        assert_eq!(g.points(), &[pt(2.0, 6.0), pt(6.0, 12.0)]);
    }

    #[test]
    fn kind_matches_metadata_name() {
        for g in samples() {
            let kind = g.kind();
            assert_eq!(kind.metadata().point_count(), g.points().len());
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_lists_known_types() {
        let err = "Star".parse::<ShapeKind>().unwrap_err();
        let RegistryError::UnknownShapeType { name, known } = err;
        assert_eq!(name, "Star");
        assert!(known.unwrap().contains("Hexagon"));
    }

    #[test]
    fn set_center_moves_by_delta() {
        let mut shape = Shape::new("t", Triangle::new([pt(0.0, 0.0), pt(6.0, 0.0), pt(0.0, 6.0)]));
        shape.set_center(pt(12.0, 12.0));
        assert!(shape.center().distance(pt(12.0, 12.0)) < EPS);
        assert!(shape.points()[0].distance(pt(10.0, 10.0)) < EPS);
    }

    #[test]
    fn duplicate_is_independent_and_unnamed() {
        let original = Shape::new("c", Circle::new(pt(0.0, 0.0), pt(5.0, 0.0))).with_color(Color::rgb(1, 2, 3));
        let mut copy = original.duplicate();
        assert_eq!(copy.name(), "");
        assert!(!copy.is_selected());
        assert_eq!(copy.color(), original.color());

        copy.move_by(DVec2::new(10.0, 10.0));
        assert_eq!(original.points(), &[pt(0.0, 0.0), pt(5.0, 0.0)]);
        assert_eq!(copy.points(), &[pt(10.0, 10.0), pt(15.0, 10.0)]);
    }

    #[test]
    fn set_parameters_missing_leaves_shape_untouched() {
        let mut shape = Shape::new("r", Rectangle::new(pt(0.0, 0.0), pt(1.0, 1.0)));
        let params = Parameters::new().point("TopLeft", pt(5.0, 5.0)).point("BottomRight", pt(9.0, 9.0));
        let err = shape.set_parameters(&params).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingParameter {
                shape: "Rectangle",
                parameter: "Width"
            }
        );
        assert_eq!(shape.points(), &[pt(0.0, 0.0), pt(1.0, 1.0)]);
    }

    #[test]
    fn non_finite_rotation_is_ignored() {
        let mut shape = Shape::new("l", Line::new(pt(1.0, 2.0), pt(3.0, 4.0)));
        shape.rotate(pt(0.0, 0.0), f64::NAN);
        shape.rotate(pt(0.0, 0.0), f64::INFINITY);
        assert_eq!(shape.points(), &[pt(1.0, 2.0), pt(3.0, 4.0)]);
    }

    // ==================== Degenerate shapes ====================

    #[test]
    fn zero_radius_circle_hits_its_center() {
        let shape = Shape::new("dot", Circle::with_radius(pt(4.0, 4.0), 0.0));
        assert_eq!(shape.center(), pt(4.0, 4.0));
        assert!(shape.hit_test(pt(4.0, 4.0), 0.01));
        assert!(shape.hit_test(pt(4.005, 4.0), 0.01));
        assert!(!shape.hit_test(pt(5.0, 4.0), 0.01));
        assert!(!shape.outline_path().is_empty());
    }

    #[test]
    fn collinear_triangle_hits_along_its_edges() {
        let shape = Shape::new("flat", Triangle::new([pt(0.0, 0.0), pt(5.0, 0.0), pt(10.0, 0.0)]));
        assert!(shape.hit_test(pt(7.0, 0.05), 0.1));
        assert!(!shape.hit_test(pt(7.0, 1.0), 0.1));
        assert_eq!(shape.outline_path().to_string(), "M0,0 L5,0 L10,0 Z");
    }

    #[test]
    fn zero_size_rectangle_hits_its_corner() {
        let shape = Shape::new("speck", Rectangle::new(pt(3.0, 3.0), pt(3.0, 3.0)));
        assert!(shape.hit_test(pt(3.0, 3.0), 0.01));
        assert!(!shape.hit_test(pt(4.0, 3.0), 0.01));
    }

    #[test]
    fn scale_by_zero_collapses_onto_center() {
        let c = pt(2.0, -1.0);
        for geometry in samples() {
            let mut shape = Shape::new("s", geometry);
            shape.scale_about(c, 0.0);
            assert!(shape.points().iter().all(|p| *p == c), "{:?}", shape.kind());
        }
    }

    #[test]
    fn negative_scale_mirrors_through_center() {
        let c = pt(2.0, -1.0);
        for original in samples() {
            let mut shape = Shape::new("s", original.clone());
            shape.scale_about(c, -1.0);
            for (p, q) in original.points().iter().zip(shape.points()) {
                assert!((*q - (c * 2.0 - *p)).length() < EPS, "{:?}: {p:?} -> {q:?}", original.kind());
            }
        }

        let mut rect = Rectangle::new(pt(0.0, 0.0), pt(10.0, 20.0));
        rect.scale_about(pt(0.0, 0.0), -1.0);
        assert_eq!((rect.width(), rect.height()), (-10.0, -20.0));
        assert!(rect.hit_test(pt(-5.0, -5.0), 0.1));
    }
}

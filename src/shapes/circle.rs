use rand::Rng;

use super::{Figure, Parameters, ShapeKind, ShapeMetadata};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::{Point, Vector, pt};

/// A circle defined by its center and one point on its circumference
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// `[center, point_on_circle]`
    points: [Point; 2],
}

impl Circle {
    pub const METADATA: ShapeMetadata = ShapeMetadata {
        name: "Circle",
        point_parameters: &["Center", "PointOnCircle"],
        scalar_parameters: &[],
    };

    pub fn new(center: Point, point_on_circle: Point) -> Self {
        Self {
            points: [center, point_on_circle],
        }
    }

    /// Circle of `radius` whose circumference point sits due east of `center`.
    pub fn with_radius(center: Point, radius: f64) -> Self {
        Self::new(center, center + Vector::new(radius, 0.0))
    }

    pub fn point_on_circle(&self) -> Point {
        self.points[1]
    }

    pub fn radius(&self) -> f64 {
        self.points[0].distance(self.points[1])
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let center = pt(
            rng.random_range(defaults::COORD_RANGE),
            rng.random_range(defaults::COORD_RANGE),
        );
        Self::with_radius(center, rng.random_range(defaults::CIRCLE_RADIUS_RANGE))
    }
}

impl Figure for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    fn center(&self) -> Point {
        self.points[0]
    }

    /// On the circumference within `epsilon`; the interior does not count.
    fn hit_test(&self, point: Point, epsilon: f64) -> bool {
        (point.distance(self.points[0]) - self.radius()).abs() <= epsilon
    }

    fn outline_path(&self) -> PathData {
        let center = self.points[0];
        let r = self.radius();
        let west = center - Vector::new(r, 0.0);
        let east = center + Vector::new(r, 0.0);
        PathData::new()
            .m(west)
            .a(r, true, false, east)
            .a(r, true, false, west)
            .z()
    }

    fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError> {
        self.points = params.require_points(&Self::METADATA)?;
        Ok(())
    }
}

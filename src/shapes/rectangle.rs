use rand::Rng;

use super::{Figure, Parameters, ShapeKind, ShapeMetadata};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::{Point, polygon_contains, pt, scale_about, segment_distance};

/// A rectangle defined by two opposite corners.
///
/// Width and height are stored alongside the corners and follow the scale
/// operations; the corners stay the source of truth for geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// `[top_left, bottom_right]`
    corners: [Point; 2],
    width: f64,
    height: f64,
}

impl Rectangle {
    pub const METADATA: ShapeMetadata = ShapeMetadata {
        name: "Rectangle",
        point_parameters: &["TopLeft", "BottomRight"],
        scalar_parameters: &["Width", "Height"],
    };

    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        let size = bottom_right - top_left;
        Self {
            corners: [top_left, bottom_right],
            width: size.x,
            height: size.y,
        }
    }

    pub fn from_origin(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin, origin + Point::new(width, height))
    }

    pub fn top_left(&self) -> Point {
        self.corners[0]
    }

    pub fn bottom_right(&self) -> Point {
        self.corners[1]
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The four outline corners: TL, TR, BR, BL.
    pub fn outline_corners(&self) -> [Point; 4] {
        let [tl, br] = self.corners;
        [tl, pt(br.x, tl.y), br, pt(tl.x, br.y)]
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let origin = pt(
            rng.random_range(defaults::COORD_RANGE),
            rng.random_range(defaults::COORD_RANGE),
        );
        let width = rng.random_range(defaults::RECT_EXTENT_RANGE);
        let height = rng.random_range(defaults::RECT_EXTENT_RANGE);
        Self::from_origin(origin, width, height)
    }
}

impl Figure for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn points(&self) -> &[Point] {
        &self.corners
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.corners
    }

    fn scale(&mut self, dx: f64, dy: f64) {
        for p in &mut self.corners {
            *p *= Point::new(dx, dy);
        }
        self.width *= dx;
        self.height *= dy;
    }

    fn scale_about(&mut self, center: Point, factor: f64) {
        for p in &mut self.corners {
            *p = scale_about(*p, center, factor);
        }
        self.width *= factor;
        self.height *= factor;
    }

    /// Inside the outline, or within `epsilon` of one of its edges.
    fn hit_test(&self, point: Point, epsilon: f64) -> bool {
        let outline = self.outline_corners();
        polygon_contains(&outline, point)
            || (0..4).any(|i| segment_distance(point, outline[i], outline[(i + 1) % 4]) <= epsilon)
    }

    fn outline_path(&self) -> PathData {
        PathData::polygon(&self.outline_corners())
    }

    fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError> {
        self.corners = params.require_points(&Self::METADATA)?;
        self.width = params.require_scalar(Self::METADATA.name, "Width")?;
        self.height = params.require_scalar(Self::METADATA.name, "Height")?;
        Ok(())
    }
}

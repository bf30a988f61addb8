use rand::Rng;

use super::{Figure, Parameters, ShapeKind, ShapeMetadata};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::{Point, pt, segment_distance};

/// A straight segment between two endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    ends: [Point; 2],
}

impl Line {
    pub const METADATA: ShapeMetadata = ShapeMetadata {
        name: "Line",
        point_parameters: &["Start", "End"],
        scalar_parameters: &[],
    };

    pub fn new(start: Point, end: Point) -> Self {
        Self { ends: [start, end] }
    }

    pub fn start(&self) -> Point {
        self.ends[0]
    }

    pub fn end(&self) -> Point {
        self.ends[1]
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut coord = || pt(rng.random_range(defaults::COORD_RANGE), rng.random_range(defaults::COORD_RANGE));
        let start = coord();
        let end = coord();
        Self::new(start, end)
    }
}

impl Figure for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn points(&self) -> &[Point] {
        &self.ends
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.ends
    }

    /// Distance to the segment, so the tolerance acts as a stroke thickness.
    fn hit_test(&self, point: Point, epsilon: f64) -> bool {
        segment_distance(point, self.ends[0], self.ends[1]) <= epsilon
    }

    fn outline_path(&self) -> PathData {
        PathData::new().m(self.ends[0]).l(self.ends[1])
    }

    fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError> {
        self.ends = params.require_points(&Self::METADATA)?;
        Ok(())
    }
}

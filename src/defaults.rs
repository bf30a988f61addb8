//! Default sizes and settings (all in picture units, i.e. pixels)

use std::ops::Range;

/// Canvas width written into the picture header.
pub const PICTURE_WIDTH: u32 = 1000;
/// Canvas height written into the picture header.
pub const PICTURE_HEIGHT: u32 = 600;

/// Hit-test tolerance used by pointer selection.
pub const HIT_EPSILON: f64 = 3.0;

/// Significant figures kept when writing coordinates.
pub const NUMBER_PRECISION: i32 = 6;

/// Stroke written for every record; the picture format does not round-trip it.
pub const STROKE: &str = "rgb(0,0,0)";
pub const STROKE_WIDTH: u32 = 1;

// Randomized default geometry

pub const COORD_RANGE: Range<f64> = 100.0..500.0;
pub const TRIANGLE_COORD_RANGE: Range<f64> = 0.0..400.0;
pub const RECT_EXTENT_RANGE: Range<f64> = 50.0..200.0;
pub const CIRCLE_RADIUS_RANGE: Range<f64> = 20.0..150.0;

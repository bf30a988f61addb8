//! Named shape parameters and the static metadata describing them.

use std::collections::HashMap;

use crate::errors::ShapeError;
use crate::types::Point;

/// Static description of a shape type's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMetadata {
    /// Display name, also the registry key.
    pub name: &'static str,
    /// Names of the point parameters, in definition order.
    pub point_parameters: &'static [&'static str],
    /// Names of the scalar parameters, in definition order.
    pub scalar_parameters: &'static [&'static str],
}

impl ShapeMetadata {
    pub fn point_count(&self) -> usize {
        self.point_parameters.len()
    }

    pub fn scalar_count(&self) -> usize {
        self.scalar_parameters.len()
    }

    /// First declared parameter missing from `params`, if any.
    pub fn first_missing(&self, params: &Parameters) -> Option<&'static str> {
        self.point_parameters
            .iter()
            .find(|name| !params.points.contains_key(**name))
            .or_else(|| {
                self.scalar_parameters
                    .iter()
                    .find(|name| !params.scalars.contains_key(**name))
            })
            .copied()
    }

    /// Check that every declared parameter is present.
    pub fn validate(&self, params: &Parameters) -> Result<(), ShapeError> {
        match self.first_missing(params) {
            Some(parameter) => Err(ShapeError::MissingParameter {
                shape: self.name,
                parameter,
            }),
            None => Ok(()),
        }
    }
}

/// Bag of named point and scalar values handed to `set_parameters`.
///
/// Names not declared by the target shape are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    pub points: HashMap<String, Point>,
    pub scalars: HashMap<String, f64>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, name: impl Into<String>, value: Point) -> Self {
        self.points.insert(name.into(), value);
        self
    }

    pub fn scalar(mut self, name: impl Into<String>, value: f64) -> Self {
        self.scalars.insert(name.into(), value);
        self
    }

    /// Look up a point, reporting it as missing for `shape` when absent.
    pub fn require_point(&self, shape: &'static str, name: &'static str) -> Result<Point, ShapeError> {
        self.points
            .get(name)
            .copied()
            .ok_or(ShapeError::MissingParameter {
                shape,
                parameter: name,
            })
    }

    /// Look up a scalar, reporting it as missing for `shape` when absent.
    pub fn require_scalar(&self, shape: &'static str, name: &'static str) -> Result<f64, ShapeError> {
        self.scalars
            .get(name)
            .copied()
            .ok_or(ShapeError::MissingParameter {
                shape,
                parameter: name,
            })
    }

    /// Collect the declared points in declaration order.
    pub(crate) fn require_points<const N: usize>(
        &self,
        metadata: &ShapeMetadata,
    ) -> Result<[Point; N], ShapeError> {
        metadata.validate(self)?;
        let mut out = [Point::ZERO; N];
        for (slot, name) in out.iter_mut().zip(metadata.point_parameters) {
            *slot = self.require_point(metadata.name, name)?;
        }
        Ok(out)
    }
}

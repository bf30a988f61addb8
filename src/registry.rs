//! Shape registry: type name to factory and metadata.
//!
//! The table is fixed at compile time. Each entry produces a shape with
//! randomized geometry and color so that a freshly created shape is visible
//! without further input.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::RegistryError;
use crate::log::debug;
use crate::shapes::{
    Circle, Geometry, Hexagon, Line, Pentagon, Rectangle, Shape, ShapeKind, ShapeMetadata, Triangle,
};
use crate::types::Color;

type Factory = fn(&mut StdRng) -> Geometry;

struct Entry {
    kind: ShapeKind,
    factory: Factory,
}

static ENTRIES: [Entry; 6] = [
    Entry {
        kind: ShapeKind::Line,
        factory: |rng| Line::random(rng).into(),
    },
    Entry {
        kind: ShapeKind::Circle,
        factory: |rng| Circle::random(rng).into(),
    },
    Entry {
        kind: ShapeKind::Rectangle,
        factory: |rng| Rectangle::random(rng).into(),
    },
    Entry {
        kind: ShapeKind::Triangle,
        factory: |rng| Triangle::random(rng).into(),
    },
    Entry {
        kind: ShapeKind::Pentagon,
        factory: |rng| Pentagon::random(rng).into(),
    },
    Entry {
        kind: ShapeKind::Hexagon,
        factory: |rng| Hexagon::random(rng).into(),
    },
];

/// Creates shapes by type name.
pub struct ShapeRegistry {
    rng: StdRng,
    issued: HashSet<String>,
}

impl ShapeRegistry {
    /// Registry seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Registry with reproducible names, geometry and colors.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    fn entry(type_name: &str) -> Result<&'static Entry, RegistryError> {
        let kind: ShapeKind = type_name.parse()?;
        ENTRIES
            .iter()
            .find(|entry| entry.kind == kind)
            .ok_or_else(|| RegistryError::UnknownShapeType {
                name: type_name.to_string(),
                known: None,
            })
    }

    /// Names of every registered shape type.
    pub fn available_types(&self) -> Vec<&'static str> {
        ENTRIES.iter().map(|entry| entry.kind.name()).collect()
    }

    pub fn metadata(&self, type_name: &str) -> Result<&'static ShapeMetadata, RegistryError> {
        Self::entry(type_name).map(|entry| entry.kind.metadata())
    }

    /// A new shape of `type_name` with random geometry, random opaque color
    /// and a name no other call on this registry has returned.
    pub fn create(&mut self, type_name: &str) -> Result<Shape, RegistryError> {
        let entry = Self::entry(type_name)?;
        let geometry = (entry.factory)(&mut self.rng);
        let color = Color::rgb(self.rng.random(), self.rng.random(), self.rng.random());
        let name = self.unique_name(entry.kind);
        debug!(name = %name, "created shape");
        Ok(Shape::new(name, geometry).with_color(color))
    }

    /// `"<Type>-<6 hex digits>"`, distinct from every name issued so far.
    pub fn unique_name(&mut self, kind: ShapeKind) -> String {
        loop {
            let suffix = self.rng.random_range(0..0x100_0000u32);
            let name = format!("{}-{suffix:06x}", kind.name());
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

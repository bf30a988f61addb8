//! Shape model and scene store for a 2-D vector picture editor.
//!
//! | module       | role                                                       |
//! |--------------|------------------------------------------------------------|
//! | [`types`]    | points, angles, colors and the affine helpers              |
//! | [`shapes`]   | the six shape variants and their common [`Figure`] contract |
//! | [`registry`] | create shapes by type name with randomized defaults        |
//! | [`scene`]    | named shapes, selection, hit-testing, change streams       |
//! | [`picture`]  | scene to picture text and back                             |
//!
//! ```
//! use sketchr::{Scene, ShapeRegistry, pt};
//!
//! let mut registry = ShapeRegistry::seeded(7);
//! let mut scene = Scene::new();
//! let circle = registry.create("Circle").unwrap();
//! let name = circle.name().to_string();
//! scene.add(circle).unwrap();
//! scene.update(&name, |shape| shape.move_by(pt(10.0, 0.0)));
//! scene.select(&name, false);
//! assert_eq!(scene.selected().len(), 1);
//! ```

use pest_derive::Parser;

pub mod defaults;
pub mod errors;
pub mod log;
pub mod path;
pub mod picture;
pub mod registry;
pub mod scene;
pub mod shapes;
pub mod types;

pub use errors::{PictureError, RegistryError, SceneError, ShapeError};
pub use picture::PictureOptions;
pub use registry::ShapeRegistry;
pub use scene::{Scene, SceneChange, SelectionChange, Subscription};
pub use shapes::{Figure, Geometry, Parameters, Shape, ShapeKind, ShapeMetadata};
pub use types::{Angle, Color, Point, Vector, pt};

#[derive(Parser)]
#[grammar = "picture.pest"]
pub struct PictureParser;

//! Picture-format bridge: scene to SVG-like text and back.
//!
//! The format is line-oriented. Writing emits a header line, one element per
//! shape in draw order and a footer. Reading walks the text line by line and
//! turns every line that matches a record of `picture.pest` into a
//! registry-created shape; everything else is skipped.

mod parse;
mod write;

use std::fs;
use std::path::Path;

use crate::defaults;
use crate::errors::PictureError;
use crate::log::{debug, warn};
use crate::registry::ShapeRegistry;
use crate::scene::Scene;

/// The only format name `save` and `load` act on (compared case-insensitively).
pub const FORMAT: &str = "svg";

/// Canvas attributes written into the picture header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for PictureOptions {
    fn default() -> Self {
        Self {
            width: defaults::PICTURE_WIDTH,
            height: defaults::PICTURE_HEIGHT,
        }
    }
}

pub fn is_supported(format: &str) -> bool {
    format.eq_ignore_ascii_case(FORMAT)
}

/// Render every shape of `scene` as picture text.
pub fn to_svg(scene: &Scene, options: &PictureOptions) -> String {
    write::Document { scene, options }.to_string()
}

/// Add one shape to `scene` per recognized record in `text`.
///
/// Returns how many shapes were added. Unrecognized lines are skipped; a name
/// that already exists in the scene is replaced by a fresh registry name.
pub fn read_svg(text: &str, scene: &mut Scene, registry: &mut ShapeRegistry) -> usize {
    let mut added = 0;
    for (index, line) in text.lines().enumerate() {
        let Some(record) = parse::parse_record(line) else {
            debug!(line = index + 1, "skipping unrecognized line");
            continue;
        };
        let Some(kind) = record.kind() else {
            debug!(line = index + 1, "skipping polygon with unsupported vertex count");
            continue;
        };

        let mut shape = match registry.create(kind.name()) {
            Ok(shape) => shape,
            Err(err) => {
                warn!(%err, "cannot create shape for record");
                continue;
            }
        };
        if let Err(err) = shape.set_parameters(&record.parameters()) {
            warn!(%err, line = index + 1, "record does not fit its shape");
            continue;
        }
        shape.set_color(record.color());

        while scene.contains(shape.name()) {
            debug!(name = shape.name(), "name taken, drawing another");
            shape = shape.with_name(registry.unique_name(kind));
        }
        match scene.add(shape) {
            Ok(()) => added += 1,
            Err(err) => warn!(%err, "cannot add loaded shape"),
        }
    }
    added
}

/// Write `scene` to `path`. Formats other than [`FORMAT`] are ignored.
pub fn save(
    scene: &Scene,
    path: impl AsRef<Path>,
    format: &str,
    options: &PictureOptions,
) -> Result<(), PictureError> {
    let path = path.as_ref();
    if !is_supported(format) {
        debug!(format, "save skipped for unsupported format");
        return Ok(());
    }
    fs::write(path, to_svg(scene, options)).map_err(|source| PictureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `path` into `scene`, returning how many shapes were added.
/// Formats other than [`FORMAT`] are ignored and add nothing.
pub fn load(
    scene: &mut Scene,
    registry: &mut ShapeRegistry,
    path: impl AsRef<Path>,
    format: &str,
) -> Result<usize, PictureError> {
    let path = path.as_ref();
    if !is_supported(format) {
        debug!(format, "load skipped for unsupported format");
        return Ok(0);
    }
    let text = fs::read_to_string(path).map_err(|source| PictureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_svg(&text, scene, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Shape};
    use crate::types::{Color, pt};

    #[test]
    fn format_check_ignores_case() {
        assert!(is_supported("svg"));
        assert!(is_supported("SVG"));
        assert!(!is_supported("png"));
    }

    #[test]
    fn empty_scene_is_header_and_footer() {
        let text = to_svg(&Scene::new(), &PictureOptions::default());
        assert_eq!(
            text,
            "<svg width='1000' height='600' xmlns='http://www.w3.org/2000/svg'>\n</svg>"
        );
    }

    #[test]
    fn options_set_canvas_size() {
        let text = to_svg(&Scene::new(), &PictureOptions { width: 320, height: 200 });
        assert!(text.starts_with("<svg width='320' height='200' "));
    }

    #[test]
    fn read_skips_junk_and_counts_shapes() {
        let text = "\
<svg width='1000' height='600' xmlns='http://www.w3.org/2000/svg'>
<circle cx='10' cy='10' r='5' style='stroke:rgb(0,0,0);stroke-width:1;fill:rgb(1,2,3);stroke-opacity:none;opacity:1' />
not a record
<polygon points='0,0 1,0 1,1 0,1' style='stroke:rgb(0,0,0);stroke-width:1;fill:rgb(1,2,3);stroke-opacity:none;opacity:1' />
<rect x='0' y='0' width='4' height='2' style='stroke:rgb(0,0,0);stroke-width:1;fill:rgb(7,8,9);opacity:1' />
</svg>";
        let mut scene = Scene::new();
        let mut registry = ShapeRegistry::seeded(3);
        assert_eq!(read_svg(text, &mut scene, &mut registry), 2);

        let shapes: Vec<&Shape> = scene.iter().collect();
        assert_eq!(shapes[0].points(), &[pt(10.0, 10.0), pt(15.0, 10.0)]);
        assert_eq!(shapes[0].color(), Color::rgb(1, 2, 3));
        assert_eq!(shapes[1].points(), &[pt(0.0, 0.0), pt(4.0, 2.0)]);
    }

    #[test]
    fn read_keeps_existing_shapes() {
        let mut scene = Scene::new();
        let mut registry = ShapeRegistry::seeded(5);
        scene
            .add(Shape::new("keep", Rectangle::new(pt(0.0, 0.0), pt(1.0, 1.0))))
            .unwrap();
        let mut source = Scene::new();
        source.add(Shape::new("c", Circle::with_radius(pt(3.0, 3.0), 2.0))).unwrap();

        let text = to_svg(&source, &PictureOptions::default());
        assert_eq!(read_svg(&text, &mut scene, &mut registry), 1);
        assert_eq!(scene.len(), 2);
        assert!(scene.contains("keep"));
    }

    #[test]
    fn unsupported_format_is_noop() {
        let mut scene = Scene::new();
        let mut registry = ShapeRegistry::seeded(1);
        let missing = std::env::temp_dir().join("sketchr-does-not-exist.png");
        assert_eq!(load(&mut scene, &mut registry, &missing, "png").unwrap(), 0);
        save(&scene, &missing, "png", &PictureOptions::default()).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn load_reports_missing_file() {
        let mut scene = Scene::new();
        let mut registry = ShapeRegistry::seeded(1);
        let missing = std::env::temp_dir().join("sketchr-missing-dir/none.svg");
        let err = load(&mut scene, &mut registry, &missing, "svg").unwrap_err();
        assert!(matches!(err, PictureError::Io { ref path, .. } if path == &missing));
    }
}

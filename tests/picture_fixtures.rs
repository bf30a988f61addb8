//! Data-driven checks over the pictures in `tests/pictures/`.
//!
//! Each fixture may declare how many shapes it should load with a comment
//! line `<!-- shapes: N -->`. Every fixture must be stable under a
//! load, save, load, save cycle.

use datatest_stable::Utf8Path;
use sketchr::picture::{self, PictureOptions};
use sketchr::{Scene, ShapeRegistry};

fn expected_count(source: &str) -> Option<usize> {
    source.lines().find_map(|line| {
        line.trim()
            .strip_prefix("<!-- shapes:")?
            .strip_suffix("-->")?
            .trim()
            .parse()
            .ok()
    })
}

/// Format a colored inline diff using dissimilar
fn format_inline_diff(first: &str, second: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::from("\n=== Inline Diff (first save vs second save) ===\n");
    for chunk in dissimilar::diff(first, second) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("\x1b[31m[-");
                output.push_str(s);
                output.push_str("-]\x1b[0m");
            }
            Chunk::Insert(s) => {
                output.push_str("\x1b[32m[+");
                output.push_str(s);
                output.push_str("+]\x1b[0m");
            }
        }
    }
    output
}

fn load_text(text: &str) -> (Scene, usize) {
    let mut scene = Scene::new();
    let mut registry = ShapeRegistry::seeded(0);
    let count = picture::read_svg(text, &mut scene, &mut registry);
    (scene, count)
}

fn test_picture_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let options = PictureOptions::default();

    let (scene, count) = load_text(&source);
    if let Some(expected) = expected_count(&source) {
        assert_eq!(count, expected, "shape count for {path}");
    }
    assert_eq!(scene.len(), count);

    let first = picture::to_svg(&scene, &options);
    let (reloaded, recount) = load_text(&first);
    assert_eq!(recount, count, "reloading the saved text of {path}");

    let second = picture::to_svg(&reloaded, &options);
    if first != second {
        panic!("unstable output for {path}:\n{}", format_inline_diff(&first, &second));
    }
    Ok(())
}

datatest_stable::harness! {
    { test = test_picture_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/pictures"), pattern = r"\.svg$" },
}

//! Emit picture-format text from a scene

use std::fmt;

use super::PictureOptions;
use crate::defaults::{STROKE, STROKE_WIDTH};
use crate::path::fmt_num;
use crate::scene::Scene;
use crate::shapes::{Figure, Geometry, Shape};
use crate::types::{Color, Point};

/// A whole picture: header, one record per shape in draw order, footer.
pub(crate) struct Document<'a> {
    pub scene: &'a Scene,
    pub options: &'a PictureOptions,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<svg width='{}' height='{}' xmlns='http://www.w3.org/2000/svg'>",
            self.options.width, self.options.height
        )?;
        for shape in self.scene.iter() {
            writeln!(f, "{}", ShapeRecord(shape))?;
        }
        f.write_str("</svg>")
    }
}

/// A single shape element on one line.
pub(crate) struct ShapeRecord<'a>(pub &'a Shape);

impl fmt::Display for ShapeRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.0.color();
        match self.0.geometry() {
            Geometry::Line(line) => {
                let (start, end) = (line.start(), line.end());
                write!(
                    f,
                    "<line x1='{}' y1='{}' x2='{}' y2='{}' ",
                    fmt_num(start.x),
                    fmt_num(start.y),
                    fmt_num(end.x),
                    fmt_num(end.y)
                )?;
                write_style(f, color, true)
            }
            Geometry::Circle(circle) => {
                let center = circle.center();
                write!(
                    f,
                    "<circle cx='{}' cy='{}' r='{}' ",
                    fmt_num(center.x),
                    fmt_num(center.y),
                    fmt_num(circle.radius())
                )?;
                write_style(f, color, true)
            }
            Geometry::Rectangle(rect) => {
                let (top_left, bottom_right) = (rect.top_left(), rect.bottom_right());
                write!(
                    f,
                    "<rect x='{}' y='{}' width='{}' height='{}' ",
                    fmt_num(top_left.x),
                    fmt_num(top_left.y),
                    fmt_num(bottom_right.x - top_left.x),
                    fmt_num(bottom_right.y - top_left.y)
                )?;
                write_style(f, color, false)
            }
            Geometry::Triangle(polygon) => write_polygon(f, polygon.vertices(), color),
            Geometry::Pentagon(polygon) => write_polygon(f, polygon.vertices(), color),
            Geometry::Hexagon(polygon) => write_polygon(f, polygon.vertices(), color),
        }
    }
}

fn write_polygon(f: &mut fmt::Formatter<'_>, vertices: &[Point], color: Color) -> fmt::Result {
    f.write_str("<polygon points='")?;
    for (i, p) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{},{}", fmt_num(p.x), fmt_num(p.y))?;
    }
    f.write_str("' ")?;
    write_style(f, color, true)
}

/// Rectangles are written without `stroke-opacity`; both forms read back.
fn write_style(f: &mut fmt::Formatter<'_>, color: Color, stroke_opacity: bool) -> fmt::Result {
    write!(f, "style='stroke:{STROKE};stroke-width:{STROKE_WIDTH};fill:{color};")?;
    if stroke_opacity {
        f.write_str("stroke-opacity:none;")?;
    }
    write!(f, "opacity:{}' />", fmt_num(color.opacity()))
}

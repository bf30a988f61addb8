//! SVG path data and number formatting.
//!
//! Shapes describe their outline as SVG path data (`M x,y L x,y ... Z`). The
//! same number formatter is used by the picture writer so that a value printed
//! in an outline and in a saved record looks identical.

use std::fmt;

use crate::defaults::NUMBER_PRECISION;
use crate::log::warn;
use crate::types::Point;

/// A single path command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Builder for SVG path data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn l(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Circular arc of `radius` ending at `to`.
    pub fn a(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polygon through `points` in order.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = PathData::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path = path.m(*first);
            for p in iter {
                path = path.l(*p);
            }
            path = path.z();
        }
        path
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", fmt_num(p.x), fmt_num(p.y))?,
                PathCommand::Arc {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let r = fmt_num(*radius);
                    write!(
                        f,
                        "A{r},{r} 0 {} {} {},{}",
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        fmt_num(to.x),
                        fmt_num(to.y)
                    )?;
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Format a number with the crate's output precision, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, NUMBER_PRECISION)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
///
/// Rounding goes through exponent notation so tiny magnitudes cannot overflow
/// the scale factor. Non-finite values are written as `0`.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() {
        warn!(value, "non-finite number written as 0");
        return "0".to_string();
    }
    let digits = sig_figs.max(1) as usize - 1;
    let rounded: f64 = match format!("{value:.digits$e}").parse() {
        Ok(rounded) => rounded,
        Err(_) => return "0".to_string(),
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    // Shortest representation that reads back as `rounded`
    format!("{rounded}")
}

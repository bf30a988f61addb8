//! Parse picture-format lines into shape records

use pest::Parser;
use pest::iterators::Pair;

use crate::shapes::{Hexagon, Parameters, Pentagon, ShapeKind, Triangle};
use crate::types::{Color, Point, pt};
use crate::{PictureParser, Rule};

/// One recognized element, still in picture-format terms.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    Line {
        start: Point,
        end: Point,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
}

impl Record {
    /// Shape variant this record loads as. Polygons other than 3, 5 or 6
    /// vertices have no variant.
    pub(crate) fn kind(&self) -> Option<ShapeKind> {
        match self {
            Record::Line { .. } => Some(ShapeKind::Line),
            Record::Circle { .. } => Some(ShapeKind::Circle),
            Record::Rect { .. } => Some(ShapeKind::Rectangle),
            Record::Polygon { points, .. } => match points.len() {
                3 => Some(ShapeKind::Triangle),
                5 => Some(ShapeKind::Pentagon),
                6 => Some(ShapeKind::Hexagon),
                _ => None,
            },
        }
    }

    pub(crate) fn color(&self) -> Color {
        match self {
            Record::Line { color, .. }
            | Record::Circle { color, .. }
            | Record::Rect { color, .. }
            | Record::Polygon { color, .. } => *color,
        }
    }

    /// Named parameters for `Shape::set_parameters` on a shape of [`Record::kind`].
    pub(crate) fn parameters(&self) -> Parameters {
        match self {
            Record::Line { start, end, .. } => Parameters::new().point("Start", *start).point("End", *end),
            Record::Circle { center, radius, .. } => Parameters::new()
                .point("Center", *center)
                .point("PointOnCircle", *center + Point::new(*radius, 0.0)),
            Record::Rect {
                origin,
                width,
                height,
                ..
            } => Parameters::new()
                .point("TopLeft", *origin)
                .point("BottomRight", *origin + Point::new(*width, *height))
                .scalar("Width", *width)
                .scalar("Height", *height),
            Record::Polygon { points, .. } => {
                let names = match points.len() {
                    3 => Triangle::METADATA.point_parameters,
                    5 => Pentagon::METADATA.point_parameters,
                    _ => Hexagon::METADATA.point_parameters,
                };
                names
                    .iter()
                    .zip(points)
                    .fold(Parameters::new(), |params, (name, p)| params.point(*name, *p))
            }
        }
    }
}

/// Parse one line. `None` for anything that is not a well-formed record.
pub(crate) fn parse_record(line: &str) -> Option<Record> {
    let mut pairs = PictureParser::parse(Rule::record, line).ok()?;
    let record = pairs.next()?;
    let element = record.into_inner().next()?;
    parse_element(element)
}

fn parse_element(pair: Pair<Rule>) -> Option<Record> {
    let rule = pair.as_rule();
    let mut numbers = Vec::new();
    let mut points = Vec::new();
    let mut color = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::number => numbers.push(parse_number(inner)?),
            Rule::point => points.push(parse_point(inner)?),
            Rule::style => color = Some(parse_style(inner)?),
            _ => {}
        }
    }
    let color = color?;

    match (rule, numbers.as_slice()) {
        (Rule::line, &[x1, y1, x2, y2]) => Some(Record::Line {
            start: pt(x1, y1),
            end: pt(x2, y2),
            color,
        }),
        (Rule::circle, &[cx, cy, r]) => Some(Record::Circle {
            center: pt(cx, cy),
            radius: r,
            color,
        }),
        (Rule::rect, &[x, y, width, height]) => Some(Record::Rect {
            origin: pt(x, y),
            width,
            height,
            color,
        }),
        (Rule::polygon, []) => Some(Record::Polygon { points, color }),
        _ => None,
    }
}

fn parse_number(pair: Pair<Rule>) -> Option<f64> {
    pair.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_point(pair: Pair<Rule>) -> Option<Point> {
    let mut inner = pair.into_inner();
    let x = parse_number(inner.next()?)?;
    let y = parse_number(inner.next()?)?;
    Some(pt(x, y))
}

/// Fill rgb plus opacity. A channel above 255 rejects the record.
fn parse_style(pair: Pair<Rule>) -> Option<Color> {
    let mut channels = [0u8; 3];
    let mut opacity = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::fill => {
                let mut bytes = inner.into_inner();
                for channel in &mut channels {
                    *channel = bytes.next()?.as_str().parse().ok()?;
                }
            }
            Rule::opacity => opacity = Some(parse_number(inner.into_inner().next()?)?),
            _ => {}
        }
    }
    let [r, g, b] = channels;
    Some(Color::from_opacity(r, g, b, opacity?))
}

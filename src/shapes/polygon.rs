//! Closed polygon variants with a fixed vertex count.

use rand::Rng;

use super::{Figure, Parameters, ShapeKind, ShapeMetadata};
use crate::defaults;
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::{Angle, Point, polygon_contains, pt, rotate_about, segment_distance};

/// Inside by even-odd ray casting, or within `epsilon` of an edge.
///
/// Vertices are taken in stored order; nothing is reordered into a hull.
fn polygon_hit(vertices: &[Point], point: Point, epsilon: f64) -> bool {
    if polygon_contains(vertices, point) {
        return true;
    }
    let n = vertices.len();
    (0..n).any(|i| segment_distance(point, vertices[i], vertices[(i + 1) % n]) <= epsilon)
}

/// Regular polygon with a random center, circumradius and orientation.
fn random_regular<const N: usize, R: Rng + ?Sized>(rng: &mut R) -> [Point; N] {
    let center = pt(
        rng.random_range(defaults::COORD_RANGE),
        rng.random_range(defaults::COORD_RANGE),
    );
    let radius = rng.random_range(defaults::CIRCLE_RADIUS_RANGE);
    let phase = Angle(rng.random_range(0.0..360.0));
    let step = 360.0 / N as f64;
    std::array::from_fn(|i| {
        let vertex = center + Point::new(radius, 0.0);
        rotate_about(vertex, center, Angle(phase.degrees() + step * i as f64))
    })
}

macro_rules! polygon_variant {
    ($(#[$doc:meta])* $name:ident, $n:literal, [$($param:literal),+ $(,)?]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            vertices: [Point; $n],
        }

        impl $name {
            pub const METADATA: ShapeMetadata = ShapeMetadata {
                name: stringify!($name),
                point_parameters: &[$($param),+],
                scalar_parameters: &[],
            };

            pub fn new(vertices: [Point; $n]) -> Self {
                Self { vertices }
            }

            pub fn vertices(&self) -> &[Point; $n] {
                &self.vertices
            }
        }

        impl Figure for $name {
            fn kind(&self) -> ShapeKind {
                ShapeKind::$name
            }

            fn points(&self) -> &[Point] {
                &self.vertices
            }

            fn points_mut(&mut self) -> &mut [Point] {
                &mut self.vertices
            }

            fn hit_test(&self, point: Point, epsilon: f64) -> bool {
                polygon_hit(&self.vertices, point, epsilon)
            }

            fn outline_path(&self) -> PathData {
                PathData::polygon(&self.vertices)
            }

            fn set_parameters(&mut self, params: &Parameters) -> Result<(), ShapeError> {
                self.vertices = params.require_points(&Self::METADATA)?;
                Ok(())
            }
        }
    };
}

polygon_variant!(
    /// Three corners
    Triangle, 3, ["Vertex1", "Vertex2", "Vertex3"]
);
polygon_variant!(
    /// Five corners
    Pentagon, 5, ["V1", "V2", "V3", "V4", "V5"]
);
polygon_variant!(
    /// Six corners
    Hexagon, 6, ["V1", "V2", "V3", "V4", "V5", "V6"]
);

impl Triangle {
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut coord = || {
            pt(
                rng.random_range(defaults::TRIANGLE_COORD_RANGE),
                rng.random_range(defaults::TRIANGLE_COORD_RANGE),
            )
        };
        let vertices = [coord(), coord(), coord()];
        Self::new(vertices)
    }
}

impl Pentagon {
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_regular(rng))
    }
}

impl Hexagon {
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_regular(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn triangle_hit_test() {
        let tri = Triangle::new([pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0)]);
        assert!(tri.hit_test(pt(2.0, 2.0), 0.1));
        assert!(!tri.hit_test(pt(8.0, 8.0), 0.1));
        assert!(tri.hit_test(pt(5.0, 5.05), 0.1), "near the hypotenuse");
    }

    #[test]
    fn stored_order_is_respected() {
        // A bow-tie: the even-odd rule leaves the crossing regions inside,
        // the top and bottom notches outside.
        let bow = Pentagon::new([pt(0.0, 0.0), pt(10.0, 10.0), pt(10.0, 0.0), pt(0.0, 10.0), pt(0.0, 5.0)]);
        assert!(bow.hit_test(pt(8.0, 5.0), 0.01));
        assert!(!bow.hit_test(pt(5.0, 1.0), 0.01));
    }

    #[test]
    fn hexagon_center_is_vertex_mean() {
        let hex = Hexagon::new([
            pt(2.0, 0.0),
            pt(6.0, 0.0),
            pt(8.0, 3.0),
            pt(6.0, 6.0),
            pt(2.0, 6.0),
            pt(0.0, 3.0),
        ]);
        assert!(hex.center().distance(pt(4.0, 3.0)) < 1e-12);
        assert_eq!(hex.outline_path().to_string(), "M2,0 L6,0 L8,3 L6,6 L2,6 L0,3 Z");
    }

    #[test]
    fn metadata_names_parameters() {
        assert_eq!(Triangle::METADATA.name, "Triangle");
        assert_eq!(Pentagon::METADATA.point_count(), 5);
        assert_eq!(Hexagon::METADATA.point_parameters[5], "V6");
    }

    #[test]
    fn random_regular_polygon_is_equilateral() {
        let mut rng = StdRng::seed_from_u64(7);
        let hex = Hexagon::random(&mut rng);
        let v = hex.vertices();
        let side = v[0].distance(v[1]);
        for i in 0..6 {
            assert!((v[i].distance(v[(i + 1) % 6]) - side).abs() < 1e-9);
        }
    }

    #[test]
    fn set_parameters_in_order() {
        let mut tri = Triangle::new([Point::ZERO; 3]);
        let params = Parameters::new()
            .point("Vertex3", pt(3.0, 3.0))
            .point("Vertex1", pt(1.0, 1.0))
            .point("Vertex2", pt(2.0, 2.0));
        tri.set_parameters(&params).unwrap();
        assert_eq!(tri.vertices(), &[pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0)]);
    }
}

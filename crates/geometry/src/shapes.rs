use derive_more::From;
use enum_as_inner::EnumAsInner;

use crate::{GeometryError, LineSegment, PointList, WorldPoint};

pub_mod_and_use!(circle, triangle, rectangle);

/// What a viewing cone needs to know about a solid obstacle.
pub trait Obstacle {
    /// Nearest point on the boundary.
    fn closest_point_to(&self, p: WorldPoint) -> WorldPoint;
    fn lies_inside(&self, p: WorldPoint) -> Result<bool, GeometryError>;
    /// Every crossing of the boundary with any of `segments`, duplicates kept.
    fn intersections_with(&self, segments: &[LineSegment]) -> PointList;
}

#[derive(Clone, Copy, Debug, PartialEq, EnumAsInner, From)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
}

impl Obstacle for Shape {
    fn closest_point_to(&self, p: WorldPoint) -> WorldPoint {
        match self {
            Shape::Circle(circle) => circle.closest_point_to(p),
            Shape::Triangle(triangle) => triangle.closest_point_to(p),
            Shape::Rectangle(rectangle) => rectangle.closest_point_to(p),
        }
    }
    fn lies_inside(&self, p: WorldPoint) -> Result<bool, GeometryError> {
        match self {
            Shape::Circle(circle) => circle.lies_inside(p),
            Shape::Triangle(triangle) => triangle.lies_inside(p),
            Shape::Rectangle(rectangle) => rectangle.lies_inside(p),
        }
    }
    fn intersections_with(&self, segments: &[LineSegment]) -> PointList {
        match self {
            Shape::Circle(circle) => circle.intersections_with(segments),
            Shape::Triangle(triangle) => triangle.intersections_with(segments),
            Shape::Rectangle(rectangle) => rectangle.intersections_with(segments),
        }
    }
}

pub fn point_in_shape(shape: &Shape, point: WorldPoint) -> Result<bool, GeometryError> {
    shape.lies_inside(point)
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use euclid::point2;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::utils_for_tests::assert_about_eq_2d;

    fn sample_shapes() -> Vec<Shape> {
        vec![
            Circle::new(point2(3.0, -2.0), 4.0).unwrap().into(),
            Triangle::new([point2(0.0, 0.0), point2(6.0, 1.0), point2(2.0, 5.0)]).into(),
            Rectangle::axis_aligned(point2(-5.0, -5.0), point2(-1.0, -2.0)).into(),
            Rectangle::from_center(point2(10.0, 10.0), 6.0, 2.0, 0.7).into(),
        ]
    }

    /// Boundary points of the sample shapes: the circle's rim and every triangle's edges.
    fn boundary_samples(shape: &Shape, steps: usize) -> PointList {
        let along_edges = |triangles: &[Triangle]| -> PointList {
            triangles
                .iter()
                .flat_map(|t| t.edges())
                .flat_map(|edge| {
                    (0..=steps).map(move |i| edge.point_at_unchecked(i as f64 / steps as f64))
                })
                .collect()
        };
        match shape {
            Shape::Circle(c) => (0..steps)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / steps as f64;
                    c.center() + euclid::vec2(angle.cos(), angle.sin()) * c.radius()
                })
                .collect(),
            Shape::Triangle(t) => along_edges(&[*t][..]),
            Shape::Rectangle(r) => along_edges(&r.triangles()[..]),
        }
    }

    #[test]
    fn test_closest_point_is_no_farther_than_any_boundary_point() {
        let mut rng = StdRng::seed_from_u64(11);
        for shape in sample_shapes() {
            let boundary = boundary_samples(&shape, 64);
            for _ in 0..50 {
                let p: WorldPoint = point2(rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0));
                let closest_distance = shape.closest_point_to(p).distance_to(p);
                for q in &boundary {
                    assert!(
                        closest_distance <= q.distance_to(p) + 1e-9,
                        "{:?}: {:?} beats closest point for {:?}",
                        shape,
                        q,
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let circle = Circle::new(point2(0.0, 0.0), 5.0).unwrap();
        let shape = Shape::from(circle);
        assert_eq!(shape.as_circle(), Some(&circle));
        assert!(shape.as_triangle().is_none());
        assert_about_eq_2d(shape.closest_point_to(point2(10.0, 0.0)), point2(5.0, 0.0));
    }

    #[test]
    fn test_point_in_shape() {
        let triangle: Shape =
            Triangle::new([point2(0.0, 0.0), point2(4.0, 0.0), point2(0.0, 4.0)]).into();
        assert_eq!(point_in_shape(&triangle, point2(2.0, 2.0)), Ok(true));
        assert_eq!(point_in_shape(&triangle, point2(3.0, 3.0)), Ok(false));
    }

    #[test]
    fn test_point_in_shape__degenerate_triangle_is_an_error() {
        let flat: Shape =
            Triangle::new([point2(0.0, 0.0), point2(1.0, 1.0), point2(2.0, 2.0)]).into();
        assert!(matches!(
            point_in_shape(&flat, point2(1.0, 1.0)),
            Err(GeometryError::DegenerateShape { .. })
        ));
        // closest point stays well defined on a flat triangle
        assert_about_eq_2d(flat.closest_point_to(point2(0.0, 2.0)), point2(1.0, 1.0));
    }
}

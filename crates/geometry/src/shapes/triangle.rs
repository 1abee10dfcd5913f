use euclid::Transform2D;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    GeometryError, LineSegment, Obstacle, PointList, SimulationFrame, TriangleFrame,
    TrianglePoint, WorldPoint,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [WorldPoint; 3],
}

impl Triangle {
    pub fn new(vertices: [WorldPoint; 3]) -> Self {
        Triangle { vertices }
    }
    pub fn vertices(&self) -> [WorldPoint; 3] {
        self.vertices
    }
    /// Positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0) / 2.0
    }
    pub fn is_degenerate(&self) -> bool {
        self.signed_area() == 0.0
    }
    pub fn validated(self) -> Result<Self, GeometryError> {
        if self.is_degenerate() {
            Err(GeometryError::DegenerateShape {
                vertices: self.vertices,
            })
        } else {
            Ok(self)
        }
    }
    /// `v0 -> v1`, `v1 -> v2`, `v2 -> v0`
    pub fn edges(&self) -> [LineSegment; 3] {
        [0, 1, 2].map(|i| LineSegment::from_endpoints(self.vertices[i], self.vertices[(i + 1) % 3]))
    }

    /// The transform taking this triangle to `(0,0), (1,0), (0,1)`.
    pub fn to_triangle_frame(
        &self,
    ) -> Result<Transform2D<f64, SimulationFrame, TriangleFrame>, GeometryError> {
        let [v0, v1, v2] = self.vertices;
        let edge_one = v1 - v0;
        let edge_two = v2 - v0;
        Transform2D::<f64, TriangleFrame, SimulationFrame>::new(
            edge_one.x, edge_one.y, edge_two.x, edge_two.y, v0.x, v0.y,
        )
        .inverse()
        .ok_or(GeometryError::DegenerateShape {
            vertices: self.vertices,
        })
    }
    pub fn to_triangle_coordinates(&self, p: WorldPoint) -> Result<TrianglePoint, GeometryError> {
        Ok(self.to_triangle_frame()?.transform_point(p))
    }
}

pub fn closest_point_on_segment_to(a: WorldPoint, b: WorldPoint, p: WorldPoint) -> WorldPoint {
    let ab = b - a;
    let ab_square_length = ab.square_length();
    if ab_square_length == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / ab_square_length).clamp(0.0, 1.0);
    a + ab * t
}

impl Obstacle for Triangle {
    fn closest_point_to(&self, p: WorldPoint) -> WorldPoint {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| closest_point_on_segment_to(a, b, p))
            .min_by_key(|candidate| OrderedFloat(candidate.distance_to(p)))
            .unwrap_or(self.vertices[0])
    }

    /// The edges count as inside.
    fn lies_inside(&self, p: WorldPoint) -> Result<bool, GeometryError> {
        let local = self.to_triangle_coordinates(p)?;
        Ok(local.x >= 0.0 && local.y >= 0.0 && local.x + local.y <= 1.0)
    }

    fn intersections_with(&self, segments: &[LineSegment]) -> PointList {
        let edges = self.edges();
        segments
            .iter()
            .flat_map(|segment| {
                edges
                    .iter()
                    .filter_map(move |edge| segment.intersection_with(edge))
            })
            .collect()
    }
}

use getset::CopyGetters;
use ordered_float::OrderedFloat;

use crate::{
    GeometryError, LineSegment, Obstacle, PointList, Triangle, WorldMove, WorldMoveExt,
    WorldPoint,
};

/// Four corners in boundary order, covered by the triangles `(v0, v1, v3)` and
/// `(v1, v2, v3)` which share the diagonal `v1 - v3`.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Rectangle {
    vertices: [WorldPoint; 4],
    triangles: [Triangle; 2],
}

impl Rectangle {
    pub fn new(vertices: [WorldPoint; 4]) -> Self {
        let [v0, v1, v2, v3] = vertices;
        Rectangle {
            vertices,
            triangles: [Triangle::new([v0, v1, v3]), Triangle::new([v1, v2, v3])],
        }
    }
    pub fn axis_aligned(min: WorldPoint, max: WorldPoint) -> Self {
        Self::new([
            min,
            WorldPoint::new(max.x, min.y),
            max,
            WorldPoint::new(min.x, max.y),
        ])
    }
    /// `width` runs along `heading_radians`, `height` across it.
    pub fn from_center(center: WorldPoint, width: f64, height: f64, heading_radians: f64) -> Self {
        let along = WorldMove::new(width / 2.0, 0.0).rotated_radians(heading_radians);
        let across = WorldMove::new(0.0, height / 2.0).rotated_radians(heading_radians);
        Self::new([
            center - along - across,
            center + along - across,
            center + along + across,
            center - along + across,
        ])
    }
    pub fn moved_by(&self, offset: WorldMove) -> Self {
        Self::new(self.vertices.map(|v| v + offset))
    }
}

impl Obstacle for Rectangle {
    fn closest_point_to(&self, p: WorldPoint) -> WorldPoint {
        let [first, second] = self.triangles.map(|t| t.closest_point_to(p));
        [first, second]
            .into_iter()
            .min_by_key(|candidate| OrderedFloat(candidate.distance_to(p)))
            .unwrap_or(first)
    }

    fn lies_inside(&self, p: WorldPoint) -> Result<bool, GeometryError> {
        let [first, second] = &self.triangles;
        Ok(first.lies_inside(p)? || second.lies_inside(p)?)
    }

    fn intersections_with(&self, segments: &[LineSegment]) -> PointList {
        self.triangles
            .iter()
            .flat_map(|t| t.intersections_with(segments))
            .collect()
    }
}

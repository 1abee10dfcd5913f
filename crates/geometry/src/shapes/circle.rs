use getset::CopyGetters;

use crate::{GeometryError, LineSegment, Obstacle, PointList, WorldMoveExt, WorldPoint, MOVE_RIGHT};

#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Circle {
    center: WorldPoint,
    radius: f64,
}

impl Circle {
    pub fn new(center: WorldPoint, radius: f64) -> Result<Self, GeometryError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::InvalidRadius { radius });
        }
        Ok(Circle { center, radius })
    }
    pub fn moved_to(&self, center: WorldPoint) -> Self {
        Circle { center, ..*self }
    }
}

impl Obstacle for Circle {
    /// From the center itself every rim point is equally close, `(1, 0)` is picked.
    fn closest_point_to(&self, p: WorldPoint) -> WorldPoint {
        self.center + (p - self.center).normalized_or(MOVE_RIGHT) * self.radius
    }

    /// Strict, the rim is outside.
    fn lies_inside(&self, p: WorldPoint) -> Result<bool, GeometryError> {
        Ok((p - self.center).length() < self.radius)
    }

    fn intersections_with(&self, segments: &[LineSegment]) -> PointList {
        let mut intersections = PointList::new();
        for segment in segments.iter().filter(|s| !s.is_degenerate()) {
            let start_centered = segment.start() - self.center;
            let a = segment.direction().square_length();
            let b = 2.0 * start_centered.dot(segment.direction());
            let c = start_centered.square_length() - self.radius * self.radius;
            let discriminant = b * b - 4.0 * a * c;
            if discriminant < 0.0 {
                continue;
            }
            for sign in [-1.0, 1.0] {
                let t = (-b + sign * discriminant.sqrt()) / (2.0 * a);
                if let Ok(point) = segment.point_at(t) {
                    intersections.push(point);
                }
            }
        }
        intersections
    }
}

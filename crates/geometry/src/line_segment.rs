use getset::CopyGetters;

use crate::{GeometryError, WorldMove, WorldPoint};

/// A start point plus a direction whose length is the segment length.
///
/// Points are `start + direction * t`, with `t` in `[0, 1]`, or in `[0, inf)`
/// when the segment is infinite (a ray). Nothing behind `start` is ever on
/// the segment.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct LineSegment {
    start: WorldPoint,
    direction: WorldMove,
    infinite: bool,
}

impl LineSegment {
    pub fn new(start: WorldPoint, direction: WorldMove) -> Self {
        LineSegment {
            start,
            direction,
            infinite: false,
        }
    }
    pub fn ray(start: WorldPoint, direction: WorldMove) -> Self {
        Self::new(start, direction).with_infinite(true)
    }
    pub fn from_endpoints(start: WorldPoint, end: WorldPoint) -> Self {
        Self::new(start, end - start)
    }
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }
    /// Far end of a finite segment, or the point one direction-length out on a ray.
    pub fn end(&self) -> WorldPoint {
        self.start + self.direction
    }
    pub fn length(&self) -> f64 {
        self.direction.length()
    }
    pub fn is_degenerate(&self) -> bool {
        self.direction.square_length() == 0.0
    }
    pub fn contains_parameter(&self, t: f64) -> bool {
        t >= 0.0 && (self.infinite || t <= 1.0)
    }
    pub fn point_at(&self, t: f64) -> Result<WorldPoint, GeometryError> {
        if !self.contains_parameter(t) {
            return Err(GeometryError::OutOfRange { t });
        }
        Ok(self.point_at_unchecked(t))
    }
    pub fn point_at_unchecked(&self, t: f64) -> WorldPoint {
        self.start + self.direction * t
    }

    /// Cramer's rule on `self.start + self.direction * s == other.start + other.direction * u`.
    ///
    /// Parallel segments never intersect here, collinear overlapping ones included.
    pub fn intersection_with(&self, other: &LineSegment) -> Option<WorldPoint> {
        let denominator = self.direction.cross(other.direction);
        if denominator == 0.0 {
            return None;
        }
        let start_to_start = other.start - self.start;
        let t_self = start_to_start.cross(other.direction) / denominator;
        let t_other = start_to_start.cross(self.direction) / denominator;
        if self.contains_parameter(t_self) && other.contains_parameter(t_other) {
            Some(self.point_at_unchecked(t_self))
        } else {
            None
        }
    }
}

pub fn intersect_segments(a: &LineSegment, b: &LineSegment) -> Option<WorldPoint> {
    a.intersection_with(b)
}

use euclid::{point2, vec2, Angle, Point2D, Rotation2D, Vector2D};

// empty enums for euclid typing
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct SimulationFrame;

/// Coordinates of a point relative to a triangle: `v0 + x * (v1 - v0) + y * (v2 - v0)`.
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct TriangleFrame;

pub type WorldPoint = Point2D<f64, SimulationFrame>;
pub type WorldMove = Vector2D<f64, SimulationFrame>;
pub type TrianglePoint = Point2D<f64, TriangleFrame>;

pub type PointList = Vec<WorldPoint>;

pub const ORIGIN: WorldPoint = point2(0.0, 0.0);
pub const MOVE_RIGHT: WorldMove = vec2(1.0, 0.0);

/// The vector operations the kernel needs on top of what euclid already gives
/// (`+`, `-`, `* k`, `dot`, `cross`, `length`, `square_length`, `normalize`).
pub trait WorldMoveExt: Sized {
    /// Rotation about the origin, counter-clockwise for positive angles.
    fn rotated(&self, angle: Angle<f64>) -> Self;
    fn rotated_radians(&self, radians: f64) -> Self {
        self.rotated(Angle::radians(radians))
    }
    /// Unit vector in the same direction, or `fallback` for the zero vector.
    fn normalized_or(&self, fallback: Self) -> Self;
    fn from_heading_degrees(degrees: f64, length: f64) -> Self;
}

impl WorldMoveExt for WorldMove {
    fn rotated(&self, angle: Angle<f64>) -> Self {
        Rotation2D::<f64, SimulationFrame, SimulationFrame>::new(angle).transform_vector(*self)
    }
    fn normalized_or(&self, fallback: Self) -> Self {
        if self.square_length() == 0.0 {
            fallback
        } else {
            self.normalize()
        }
    }
    fn from_heading_degrees(degrees: f64, length: f64) -> Self {
        let radians = degrees.to_radians();
        vec2(radians.cos(), radians.sin()) * length
    }
}

pub fn rotate_point_around_point(
    axis_point: WorldPoint,
    moving_point: WorldPoint,
    angle: Angle<f64>,
) -> WorldPoint {
    axis_point + (moving_point - axis_point).rotated(angle)
}

pub fn point_to_string(point: WorldPoint) -> String {
    format!("({:.3}, {:.3})", point.x, point.y)
}

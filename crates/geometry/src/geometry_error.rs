use crate::WorldPoint;

/// Invariant violations in scene or sensor configuration.
///
/// Finding nothing (parallel lines, a ray missing a circle, an empty cone) is
/// never an error, those queries return `None` or an empty list.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("triangle {vertices:?} has zero area")]
    DegenerateShape { vertices: [WorldPoint; 3] },
    #[error("cone half-angle of {half_angle} rad is outside (0, pi)")]
    InvalidConeAngle { half_angle: f64 },
    #[error("cone apex and look-at point coincide")]
    DegenerateCone,
    #[error("parameter {t} is outside the segment")]
    OutOfRange { t: f64 },
    #[error("circle radius {radius} is not positive")]
    InvalidRadius { radius: f64 },
}

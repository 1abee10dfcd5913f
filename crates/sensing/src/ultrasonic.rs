use getset::CopyGetters;
use log::debug;

use geometry::{distance_to_closest, GeometryError, ViewingCone, WorldMove, WorldMoveExt};

use crate::{SensingConfig, SensingError, SensorPort, SensorPose, Target};

/// Reported when nothing is in the beam, or the sensor sits inside a target.
pub const NO_TARGET: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct UltrasonicSensor {
    port: SensorPort,
    config: SensingConfig,
}

impl UltrasonicSensor {
    pub fn new(port: SensorPort) -> Self {
        Self::with_config(port, SensingConfig::default())
    }
    pub fn with_config(port: SensorPort, config: SensingConfig) -> Self {
        UltrasonicSensor { port, config }
    }

    pub fn viewing_cone<'a>(&self, pose: SensorPose) -> Result<ViewingCone<'a>, GeometryError> {
        let look_at = pose.location
            + WorldMove::from_heading_degrees(
                pose.beam_heading_degrees(self.port),
                self.config.look_distance(),
            );
        ViewingCone::from_opening_angle(
            pose.location,
            look_at,
            self.config.beam_width_degrees().to_radians(),
            self.config.infinite_beam(),
        )
    }

    /// Distance to the nearest visible mesh triangle of any target.
    pub fn measure(&self, pose: SensorPose, targets: &[Target]) -> Result<Option<f64>, SensingError> {
        let cone = self.viewing_cone(pose)?;
        let mut obstacles = vec![];
        for target in targets {
            obstacles.extend(target.obstacles()?);
        }
        let distance = distance_to_closest(&cone, &obstacles);
        debug!(
            "{} sees {:?} among {} mesh triangles",
            self.port,
            distance,
            obstacles.len()
        );
        Ok(distance)
    }

    pub fn distance(&self, pose: SensorPose, targets: &[Target]) -> Result<i32, SensingError> {
        Ok(to_protocol_distance(self.measure(pose, targets)?))
    }
}

/// Whole distance units, with [`NO_TARGET`] standing in for no reading.
pub fn to_protocol_distance(distance: Option<f64>) -> i32 {
    match distance {
        Some(d) if d.is_finite() && d.trunc() >= 1.0 => d.trunc() as i32,
        _ => NO_TARGET,
    }
}

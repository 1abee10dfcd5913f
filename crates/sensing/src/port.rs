use derive_more::Constructor;
use geometry::WorldPoint;
use strum_macros::{Display, EnumIter};

/// Where on the robot a sensor is mounted, which fixes the direction its
/// beam points relative to the robot's heading.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum SensorPort {
    S1,
    S2,
    S3,
}

impl SensorPort {
    pub fn offset_degrees(&self) -> f64 {
        match self {
            SensorPort::S1 => 0.0,
            SensorPort::S2 => -90.0,
            SensorPort::S3 => 180.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Constructor)]
pub struct SensorPose {
    pub location: WorldPoint,
    pub heading_degrees: f64,
}

impl SensorPose {
    pub fn beam_heading_degrees(&self, port: SensorPort) -> f64 {
        self.heading_degrees + port.offset_degrees()
    }
}

#[cfg(test)]
mod tests {
    use geometry::point2;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_port_offsets() {
        let offsets: Vec<f64> = SensorPort::iter().map(|p| p.offset_degrees()).collect();
        assert_eq!(offsets, vec![0.0, -90.0, 180.0]);
    }

    #[test]
    fn test_beam_heading() {
        let pose = SensorPose::new(point2(0.0, 0.0), 45.0);
        assert_eq!(pose.beam_heading_degrees(SensorPort::S1), 45.0);
        assert_eq!(pose.beam_heading_degrees(SensorPort::S2), -45.0);
        assert_eq!(pose.beam_heading_degrees(SensorPort::S3), 225.0);
    }

    #[test]
    fn test_port_display() {
        assert_eq!(SensorPort::S2.to_string(), "S2");
    }
}

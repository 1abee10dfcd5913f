use getset::CopyGetters;

#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct SensingConfig {
    /// Full opening angle of the beam, split evenly either side of its axis.
    beam_width_degrees: f64,
    /// How far ahead of the sensor the beam axis is aimed.
    look_distance: f64,
    infinite_beam: bool,
    default_trigger_level: i32,
}

impl Default for SensingConfig {
    fn default() -> Self {
        SensingConfig {
            beam_width_degrees: 20.0,
            look_distance: 1000.0,
            infinite_beam: true,
            default_trigger_level: 100,
        }
    }
}

impl SensingConfig {
    pub fn with_beam_width_degrees(mut self, beam_width_degrees: f64) -> Self {
        self.beam_width_degrees = beam_width_degrees;
        self
    }
    pub fn with_look_distance(mut self, look_distance: f64) -> Self {
        self.look_distance = look_distance;
        self
    }
    pub fn with_infinite_beam(mut self, infinite_beam: bool) -> Self {
        self.infinite_beam = infinite_beam;
        self
    }
    pub fn with_default_trigger_level(mut self, default_trigger_level: i32) -> Self {
        self.default_trigger_level = default_trigger_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SensingConfig::default();
        assert_eq!(config.beam_width_degrees(), 20.0);
        assert_eq!(config.look_distance(), 1000.0);
        assert!(config.infinite_beam());
        assert_eq!(config.default_trigger_level(), 100);
    }

    #[test]
    fn test_builders_only_touch_their_field() {
        let config = SensingConfig::default()
            .with_beam_width_degrees(30.0)
            .with_infinite_beam(false);
        assert_eq!(config.beam_width_degrees(), 30.0);
        assert!(!config.infinite_beam());
        assert_eq!(config.look_distance(), 1000.0);
        assert_eq!(
            config.with_default_trigger_level(40).default_trigger_level(),
            40
        );
    }
}

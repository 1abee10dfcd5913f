use log::debug;

use crate::{
    EventDispatcher, ProximityTrigger, SensingError, SensorPose, TargetRegistry,
    UltrasonicListener, UltrasonicSensor,
};

/// One sensor watched by one listener.
pub struct SensorPoller {
    sensor: UltrasonicSensor,
    trigger: ProximityTrigger,
    dispatcher: EventDispatcher,
}

impl SensorPoller {
    pub fn new(sensor: UltrasonicSensor, listener: impl UltrasonicListener + 'static) -> Self {
        let level = sensor.config().default_trigger_level();
        Self::with_trigger_level(sensor, listener, level)
    }
    pub fn with_trigger_level(
        sensor: UltrasonicSensor,
        listener: impl UltrasonicListener + 'static,
        level: i32,
    ) -> Self {
        SensorPoller {
            sensor,
            trigger: ProximityTrigger::new(level),
            dispatcher: EventDispatcher::new(listener),
        }
    }

    pub fn sensor(&self) -> &UltrasonicSensor {
        &self.sensor
    }
    pub fn trigger_level(&self) -> i32 {
        self.trigger.level()
    }
    /// Returns the previous level.
    pub fn set_trigger_level(&mut self, level: i32) -> i32 {
        self.trigger.set_level(level)
    }

    /// Takes one reading against the registry's current targets and hands any
    /// resulting near/far transition to the listener. Returns the reading.
    pub fn poll(&mut self, pose: SensorPose, registry: &TargetRegistry) -> Result<i32, SensingError> {
        let targets = registry.snapshot();
        let value = self.sensor.distance(pose, &targets)?;
        if let Some(event) = self.trigger.update(value) {
            debug!("{} crossed trigger level {}", self.sensor.port(), self.trigger.level());
            self.dispatcher.dispatch(self.sensor.port(), event)?;
        }
        Ok(value)
    }
}

use getset::CopyGetters;

use crate::NO_TARGET;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProximityEvent {
    /// Something came closer than the trigger level.
    Near(i32),
    /// Nothing within the trigger level anymore, `-1` when nothing is seen at all.
    Far(i32),
}

/// Turns a stream of distance readings into near/far transitions.
///
/// Each side fires once when the reading crosses over to it and stays quiet
/// until the reading has been on the other side again. The very first
/// reading always fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
pub struct ProximityTrigger {
    #[get_copy = "pub"]
    level: i32,
    near_notified: bool,
    far_notified: bool,
}

impl ProximityTrigger {
    pub fn new(level: i32) -> Self {
        ProximityTrigger {
            level,
            near_notified: false,
            far_notified: false,
        }
    }

    /// Returns the previous level.
    pub fn set_level(&mut self, level: i32) -> i32 {
        std::mem::replace(&mut self.level, level)
    }

    pub fn update(&mut self, value: i32) -> Option<ProximityEvent> {
        let effective = if value == NO_TARGET { i32::MAX } else { value };
        if effective < self.level {
            self.far_notified = false;
            if !self.near_notified {
                self.near_notified = true;
                return Some(ProximityEvent::Near(effective));
            }
        } else {
            self.near_notified = false;
            if !self.far_notified {
                self.far_notified = true;
                return Some(ProximityEvent::Far(value));
            }
        }
        None
    }
}

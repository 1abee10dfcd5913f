use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::{ProximityEvent, SensingError, SensorPort};

pub trait UltrasonicListener: Send {
    fn near(&mut self, port: SensorPort, value: i32);
    fn far(&mut self, port: SensorPort, value: i32);
}

/// Runs listener callbacks on one worker thread, in the order the events
/// were dispatched. Dropping the dispatcher delivers what is still queued
/// and waits for the worker.
pub struct EventDispatcher {
    sender: Option<Sender<(SensorPort, ProximityEvent)>>,
    worker: Option<JoinHandle<()>>,
}

impl EventDispatcher {
    pub fn new(mut listener: impl UltrasonicListener + 'static) -> Self {
        let (tx, rx) = channel::<(SensorPort, ProximityEvent)>();
        let worker = thread::spawn(move || {
            for (port, event) in rx {
                match event {
                    ProximityEvent::Near(value) => listener.near(port, value),
                    ProximityEvent::Far(value) => listener.far(port, value),
                }
            }
        });
        EventDispatcher {
            sender: Some(tx),
            worker: Some(worker),
        }
    }

    pub fn dispatch(&self, port: SensorPort, event: ProximityEvent) -> Result<(), SensingError> {
        debug!("{}: {:?}", port, event);
        self.sender
            .as_ref()
            .ok_or(SensingError::ListenerDisconnected)?
            .send((port, event))
            .map_err(|_| SensingError::ListenerDisconnected)
    }
}

impl Drop for EventDispatcher {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("ultrasonic listener panicked");
            }
        }
    }
}

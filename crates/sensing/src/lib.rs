//! Simulated ultrasonic sensing on top of `geometry`: sensor ports, targets
//! made of triangle meshes, distance measurement and edge-triggered
//! near/far notification.

use geometry::pub_mod_and_use;

pub_mod_and_use!(config, sensing_error, port, target, ultrasonic, trigger, listener, poller);

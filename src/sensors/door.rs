//! IR break-beam door sensor.
//!
//! The module's digital output is HIGH while the beam is interrupted (door
//! open) and LOW when the door is closed. No debouncing: every poll reports
//! the raw level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO level via hw_init helpers.
//! On host/test: reads the simulated level table (drive it with
//! [`hw_init::sim_set_input`]).

use crate::drivers::hw_init;

pub struct DoorSensor {
    gpio: i32,
}

impl DoorSensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// `true` if the sensor reports the door open.
    pub fn is_open(&self) -> bool {
        hw_init::gpio_read(self.gpio)
    }
}

//! Digital output driver for the LED and buzzer.
//!
//! A dumb actuator: writes a level. Writes are idempotent; re-asserting the
//! current level still hits the register so a pin that was disturbed
//! elsewhere is corrected on the next write.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init helpers.
//! On host/test: writes into the simulated level table.

use crate::drivers::hw_init;

pub struct DigitalOutput {
    pin: i32,
}

impl DigitalOutput {
    /// Wrap an output pin already configured by [`hw_init::init_peripherals`].
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }

    pub fn set(&mut self, high: bool) {
        hw_init::gpio_write(self.pin, high);
    }
}

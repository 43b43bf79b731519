//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the door sensor and both output drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use the simulated pin table.
//!
//! An adapter is a thin handle over fixed pins, so the command context and
//! the monitor each own one; writes from either land on the same GPIOs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::output::DigitalOutput;
use crate::pins;
use crate::sensors::door::DoorSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor: DoorSensor,
    led: DigitalOutput,
    buzzer: DigitalOutput,
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareAdapter {
    /// Handle over the board pins. Requires
    /// [`init_peripherals`](crate::drivers::hw_init::init_peripherals) first.
    pub fn new() -> Self {
        Self {
            sensor: DoorSensor::new(pins::IR_SENSOR_GPIO),
            led: DigitalOutput::new(pins::LED_GPIO),
            buzzer: DigitalOutput::new(pins::BUZZER_GPIO),
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_sensor(&mut self) -> bool {
        self.sensor.is_open()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_led(&mut self, on: bool) {
        self.led.set(on);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }
}

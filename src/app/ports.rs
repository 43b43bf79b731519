//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CommandHandler / AlarmMonitor (domain)
//! ```
//!
//! Driven adapters (sensor, actuators, platform sink) implement these
//! traits.  The domain consumes them via generics, so it never touches
//! hardware or the network directly.  Timing goes through
//! `embedded_hal::delay::DelayNs`, the ecosystem's delay port.
//!
//! All ports here are infallible: GPIO writes cannot fail once configured,
//! and platform publications are fire-and-forget.

use super::events::{DiagTag, Property};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the door sensor.
pub trait SensorPort {
    /// `true` if the sensor reports the door open. No side effects.
    fn read_sensor(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: level writes for the two outputs. Idempotent.
pub trait ActuatorPort {
    fn set_led(&mut self, on: bool);

    fn set_buzzer(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Platform sink (driven adapter: domain → cloud / logs)
// ───────────────────────────────────────────────────────────────

/// Outbound capability to the device-management platform.
///
/// Implementations MUST NOT block: if the platform is unreachable the
/// message is dropped (at-most-once, no retry).
pub trait PlatformSink {
    /// Push a read-side parameter update.
    fn publish(&mut self, property: Property);

    /// Raise a user-facing alert notification.
    fn raise_alert(&mut self, message: &str);

    /// Emit a tagged diagnostic event.
    fn diagnostic(&mut self, tag: DiagTag, message: core::fmt::Arguments<'_>);
}

//! Application core: pure domain logic, zero I/O.
//!
//! Two logical threads of control share one [`state::SharedState`]:
//!
//! - the [`handler::CommandHandler`], invoked whenever the platform delivers
//!   a write-command, and
//! - the [`monitor::AlarmMonitor`], a long-lived polling loop.
//!
//! All interaction with hardware, the platform, and time happens through
//! the **port traits** in [`ports`] (plus `embedded_hal::delay::DelayNs`),
//! keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod handler;
pub mod monitor;
pub mod ports;
pub mod state;

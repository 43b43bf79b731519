//! State shared between the command context and the monitor loop.
//!
//! Two independent flags, each a single atomic word.  No transaction spans
//! both: the monitor may observe a command up to one poll period late,
//! which is acceptable for a door alarm.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flags mutated by the command handler and read by the monitor.
///
/// Single writer per field: only the alarm-switch command writes
/// `alarm_armed`, only the light command writes `commanded_light`.
#[derive(Debug, Default)]
pub struct SharedState {
    alarm_armed: AtomicBool,
    commanded_light: AtomicBool,
}

impl SharedState {
    /// Both flags start `false` (disarmed, light off).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alarm_armed(&self) -> bool {
        self.alarm_armed.load(Ordering::Acquire)
    }

    pub fn set_alarm_armed(&self, armed: bool) {
        self.alarm_armed.store(armed, Ordering::Release);
    }

    /// Last light level requested by a user command. Never reflects an
    /// alarm blink.
    pub fn commanded_light(&self) -> bool {
        self.commanded_light.load(Ordering::Acquire)
    }

    pub fn set_commanded_light(&self, on: bool) {
        self.commanded_light.store(on, Ordering::Release);
    }
}

/// Door position as derived from the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    /// No reading taken yet.
    #[default]
    Unknown,
    Open,
    Closed,
}

impl DoorState {
    pub fn from_sensor(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Wire label used for the "Door Status" parameter.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "OPENED",
            Self::Closed => "CLOSED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Cooperative cancellation handle for the monitor loop.
///
/// Cloning shares the same flag. Firmware never cancels; hosted runs and
/// tests do.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

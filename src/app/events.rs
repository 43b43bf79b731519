//! Outbound application events.
//!
//! The core pushes these through the
//! [`PlatformSink`](super::ports::PlatformSink) port.  Adapters on the other
//! side decide where they go.

use super::commands::{
    ALARM_DEVICE, ALARM_TRIGGERED_PARAM, DOOR_DEVICE, DOOR_STATUS_PARAM, LIGHT_DEVICE, POWER_PARAM,
};
use super::state::DoorState;

/// A read-side parameter update for the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Echo of the light's power after a light command.
    LightPower(bool),
    /// Echo of the alarm switch after an arm/disarm command.
    AlarmPower(bool),
    /// "OPENED" / "CLOSED".
    DoorStatus(DoorState),
    /// True iff armed and the door is open.
    AlarmTriggered(bool),
}

impl Property {
    pub fn device(&self) -> &'static str {
        match self {
            Self::LightPower(_) => LIGHT_DEVICE,
            Self::AlarmPower(_) => ALARM_DEVICE,
            Self::DoorStatus(_) | Self::AlarmTriggered(_) => DOOR_DEVICE,
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            Self::LightPower(_) | Self::AlarmPower(_) => POWER_PARAM,
            Self::DoorStatus(_) => DOOR_STATUS_PARAM,
            Self::AlarmTriggered(_) => ALARM_TRIGGERED_PARAM,
        }
    }
}

/// Tag of a fire-and-forget diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagTag {
    LightAction,
    AlarmAction,
    DoorAction,
    SecurityAlert,
}

impl DiagTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LightAction => "LIGHT_ACTION",
            Self::AlarmAction => "ALARM_ACTION",
            Self::DoorAction => "DOOR_ACTION",
            Self::SecurityAlert => "SECURITY_ALERT",
        }
    }
}

/// "ON" / "OFF" rendering used in diagnostic messages.
pub fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

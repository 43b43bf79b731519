//! Inbound write-commands from the device-management platform.
//!
//! The platform delivers `{device, param, value}` tuples; the
//! [`CommandHandler`](super::handler::CommandHandler) routes the two pairs it
//! knows and acknowledges everything else as a no-op.

use core::fmt;

use crate::error::HardwareFault;

// ───────────────────────────────────────────────────────────────
// Device / parameter names
// ───────────────────────────────────────────────────────────────

pub const LIGHT_DEVICE: &str = "Home Light";
pub const ALARM_DEVICE: &str = "Alarm System";
pub const DOOR_DEVICE: &str = "Door Sensor Status";

pub const POWER_PARAM: &str = "Power";
pub const DOOR_STATUS_PARAM: &str = "Door Status";
pub const ALARM_TRIGGERED_PARAM: &str = "Alarm Triggered";

/// Capacity of device and parameter names carried in a [`WriteCommand`].
pub const NAME_CAP: usize = 32;

pub type Name = heapless::String<NAME_CAP>;

// ───────────────────────────────────────────────────────────────
// WriteCommand
// ───────────────────────────────────────────────────────────────

/// One parameter write requested by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCommand {
    pub device: Name,
    pub param: Name,
    pub value: bool,
}

impl WriteCommand {
    /// Build a command, or `None` if a name exceeds [`NAME_CAP`].
    pub fn new(device: &str, param: &str, value: bool) -> Option<Self> {
        Some(Self {
            device: Name::try_from(device).ok()?,
            param: Name::try_from(param).ok()?,
            value,
        })
    }

    /// Which handler this command is for, if any.
    pub fn target(&self) -> Option<CommandTarget> {
        CommandTarget::from_names(&self.device, &self.param)
    }
}

/// The write-commands with real behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    /// ("Home Light", "Power")
    LightPower,
    /// ("Alarm System", "Power")
    AlarmPower,
}

impl CommandTarget {
    pub fn from_names(device: &str, param: &str) -> Option<Self> {
        match (device, param) {
            (LIGHT_DEVICE, POWER_PARAM) => Some(Self::LightPower),
            (ALARM_DEVICE, POWER_PARAM) => Some(Self::AlarmPower),
            _ => None,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Outcome
// ───────────────────────────────────────────────────────────────

/// Successful handling of a write-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// The command was applied and its value echoed back.
    Applied(CommandTarget),
    /// Unknown device/param pair; nothing happened.
    Ignored,
}

/// A write-command the hardware could not apply.
///
/// Never produced by the GPIO back-end, which cannot fail after init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected {
    pub target: CommandTarget,
    pub fault: HardwareFault,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} rejected: {}", self.target, self.fault)
    }
}

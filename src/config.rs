//! System configuration parameters
//!
//! Timing and task parameters for the door alarm. Defaults match the
//! deployed board; a JSON override may be supplied at bootstrap.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    // --- Timing ---
    /// Baseline monitor poll period (milliseconds)
    pub poll_interval_ms: u32,
    /// LED blink half-period while alarming (milliseconds)
    pub blink_half_period_ms: u32,

    // --- Monitor task ---
    /// Monitor thread stack size (KiB)
    pub monitor_stack_kb: usize,
    /// Monitor thread FreeRTOS priority
    pub monitor_priority: u8,

    // --- Uplink forwarder task ---
    /// Forwarder thread stack size (KiB); JSON encoding and log formatting
    /// run on it
    pub uplink_stack_kb: usize,
    /// Forwarder thread FreeRTOS priority
    pub uplink_priority: u8,

    // --- Platform ---
    /// Text of the one-shot intrusion alert
    pub alert_message: heapless::String<64>,
    /// Node name announced to the device-management platform
    pub node_name: heapless::String<32>,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        let mut alert_message = heapless::String::new();
        let _ = alert_message.push_str("Door opened while alarm is ON!");
        let mut node_name = heapless::String::new();
        let _ = node_name.push_str("SmartHomeNode");

        Self {
            // Timing
            poll_interval_ms: 200,
            blink_half_period_ms: 150,

            // Monitor task
            monitor_stack_kb: 4,
            monitor_priority: 5,

            // Uplink forwarder task
            uplink_stack_kb: 16,
            uplink_priority: 4,

            // Platform
            alert_message,
            node_name,
        }
    }
}

impl AlarmConfig {
    /// Defaults, or the JSON override when one is supplied.
    pub fn load(override_json: Option<&str>) -> Result<Self> {
        match override_json {
            Some(json) => Self::from_json(json),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Parse a JSON override. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed config JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the monitor cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be > 0"));
        }
        if self.blink_half_period_ms == 0 {
            return Err(Error::Config("blink_half_period_ms must be > 0"));
        }
        if self.blink_half_period_ms > self.poll_interval_ms {
            return Err(Error::Config("blink_half_period_ms must not exceed poll_interval_ms"));
        }
        if self.monitor_stack_kb == 0 {
            return Err(Error::Config("monitor_stack_kb must be > 0"));
        }
        if self.uplink_stack_kb == 0 {
            return Err(Error::Config("uplink_stack_kb must be > 0"));
        }
        if self.alert_message.is_empty() {
            return Err(Error::Config("alert_message must not be empty"));
        }
        Ok(())
    }
}

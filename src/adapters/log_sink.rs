//! Log-based platform sink adapter.
//!
//! Implements [`PlatformSink`] by writing every publication to the ESP-IDF
//! logger (UART / USB-CDC in production).  Property updates are rendered as
//! the platform's param JSON so the console shows exactly what the cloud
//! would receive.

use log::{info, warn};

use crate::app::events::{DiagTag, Property};
use crate::app::ports::PlatformSink;

use super::params::encode_property;

/// Adapter that logs every publication to the serial console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPlatformSink;

impl LogPlatformSink {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformSink for LogPlatformSink {
    fn publish(&mut self, property: Property) {
        info!("PARAM | {}", encode_property(&property));
    }

    fn raise_alert(&mut self, message: &str) {
        warn!("ALERT | {}", message);
    }

    fn diagnostic(&mut self, tag: DiagTag, message: core::fmt::Arguments<'_>) {
        info!("DIAG  | {} | {}", tag.as_str(), message);
    }
}

//! Write-command handler: the inbound half of the core.
//!
//! Runs in whatever context the platform delivers commands on.  It never
//! sleeps: each command mutates [`SharedState`], drives the outputs, and
//! echoes the confirmed value straight back through the sink.
//!
//! ```text
//!  WriteCommand ──▶ CommandHandler ──▶ SharedState ──▶ (next tick) AlarmMonitor
//!                        │
//!                        ├──▶ ActuatorPort (LED / buzzer)
//!                        └──▶ PlatformSink (echo, diagnostics)
//! ```

use std::sync::Arc;

use log::{debug, info};

use super::commands::{Ack, CommandTarget, Rejected, WriteCommand};
use super::events::{DiagTag, Property, on_off};
use super::ports::{ActuatorPort, PlatformSink};
use super::state::{DoorState, SharedState};

/// Applies light and alarm-switch commands.
pub struct CommandHandler {
    state: Arc<SharedState>,
}

impl CommandHandler {
    pub fn new(state: Arc<SharedState>) -> Self {
        Self { state }
    }

    /// Route one write-command.
    ///
    /// Unknown device/param pairs are acknowledged as [`Ack::Ignored`].
    pub fn handle_write(
        &self,
        cmd: &WriteCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl PlatformSink,
    ) -> Result<Ack, Rejected> {
        let Some(target) = cmd.target() else {
            debug!("Ignoring write {}/{}", cmd.device, cmd.param);
            return Ok(Ack::Ignored);
        };

        match target {
            CommandTarget::LightPower => self.set_light(cmd.value, hw, sink),
            CommandTarget::AlarmPower => self.set_alarm(cmd.value, hw, sink),
        }
        Ok(Ack::Applied(target))
    }

    fn set_light(&self, on: bool, hw: &mut impl ActuatorPort, sink: &mut impl PlatformSink) {
        self.state.set_commanded_light(on);
        hw.set_led(on);
        info!("Light power -> {}", on_off(on));
        sink.diagnostic(DiagTag::LightAction, format_args!("Light Power -> {}", on_off(on)));
        sink.publish(Property::LightPower(on));
    }

    fn set_alarm(&self, armed: bool, hw: &mut impl ActuatorPort, sink: &mut impl PlatformSink) {
        self.state.set_alarm_armed(armed);
        info!("Alarm system set to {}", on_off(armed));
        sink.diagnostic(
            DiagTag::AlarmAction,
            format_args!("Alarm System set to: {}", on_off(armed)),
        );

        if !armed {
            // Disarm wins over any blink in progress.
            sink.publish(Property::DoorStatus(DoorState::Closed));
            sink.publish(Property::AlarmTriggered(false));
            hw.set_buzzer(false);
            hw.set_led(self.state.commanded_light());
        }

        sink.publish(Property::AlarmPower(armed));
    }
}

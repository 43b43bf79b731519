//! Alarm monitor: the polling half of the core.
//!
//! One long-lived task reads the door sensor every tick, publishes door
//! edges, and runs the alarm behaviour against the shared arm flag:
//!
//! ```text
//!            ┌──────────── read sensor ────────────┐
//!            │ edge? → publish OPENED / CLOSED     │
//!            └──────────────────┬──────────────────┘
//!                               │
//!        ┌──────────────────────┼───────────────────────┐
//!  armed & open           armed & closed            disarmed
//!  triggered=true         buzzer off                CLOSED / false
//!  buzzer on, LED blink   LED → rest                buzzer off, LED → rest
//!  one alert per episode                            latch cleared
//!  (2 × 150 ms holds)     (200 ms)                  (200 ms)
//! ```
//!
//! The LED "rest" level is always the last user-commanded light state; the
//! monitor never writes it back into [`SharedState`].

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::AlarmConfig;

use super::events::{DiagTag, Property};
use super::ports::{ActuatorPort, PlatformSink, SensorPort};
use super::state::{DoorState, SharedState, StopToken};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Armed with the door open: one blink cycle replaced the poll delay.
    Alarming,
    /// Baseline poll delay was taken.
    Idle,
}

/// Sensor-driven alarm state machine.
pub struct AlarmMonitor {
    state: Arc<SharedState>,
    poll_interval_ms: u32,
    blink_half_period_ms: u32,
    alert_message: heapless::String<64>,
    /// Door state as of the previous tick.
    door: DoorState,
    /// Latched once the alert for the current open episode has gone out.
    notification_sent: bool,
    tick_count: u64,
}

impl AlarmMonitor {
    pub fn new(state: Arc<SharedState>, config: &AlarmConfig) -> Self {
        Self {
            state,
            poll_interval_ms: config.poll_interval_ms,
            blink_half_period_ms: config.blink_half_period_ms,
            alert_message: config.alert_message.clone(),
            door: DoorState::Unknown,
            notification_sent: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Tick until `stop` is cancelled. Returns the number of ticks run.
    ///
    /// The token is checked before every tick, so cancellation takes effect
    /// within one poll period (or one blink cycle).
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl PlatformSink,
        delay: &mut impl DelayNs,
        stop: &StopToken,
    ) -> u64 {
        info!(
            "Monitor running (poll={}ms, blink={}ms)",
            self.poll_interval_ms, self.blink_half_period_ms
        );
        let start = self.tick_count;
        while !stop.is_cancelled() {
            self.tick(hw, sink, delay);
        }
        info!("Monitor stopped after {} ticks", self.tick_count - start);
        self.tick_count - start
    }

    // ── Per-tick state machine ────────────────────────────────

    /// Run one full iteration, including its delay.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl PlatformSink,
        delay: &mut impl DelayNs,
    ) -> TickOutcome {
        self.tick_count += 1;

        // 1. Door edge detection
        let door = DoorState::from_sensor(hw.read_sensor());
        if door != self.door {
            self.on_door_edge(door, sink);
        }

        // 2. Alarm behaviour
        if self.state.alarm_armed() {
            if door == DoorState::Open {
                self.alarm_cycle(hw, sink, delay);
                return TickOutcome::Alarming;
            }
            hw.set_buzzer(false);
            hw.set_led(self.state.commanded_light());
        } else {
            // Disarmed: republish the reset every tick, not just on change.
            sink.publish(Property::DoorStatus(DoorState::Closed));
            sink.publish(Property::AlarmTriggered(false));
            hw.set_buzzer(false);
            hw.set_led(self.state.commanded_light());
            self.notification_sent = false;
        }

        // 3. Baseline delay
        delay.delay_ms(self.poll_interval_ms);
        TickOutcome::Idle
    }

    fn on_door_edge(&mut self, door: DoorState, sink: &mut impl PlatformSink) {
        info!("Door {:?} -> {:?}", self.door, door);
        sink.diagnostic(DiagTag::DoorAction, format_args!("Door Sensor: {}", door.label()));
        sink.publish(Property::DoorStatus(door));
        if door == DoorState::Closed {
            // Closing always clears a pending trigger, armed or not.
            sink.publish(Property::AlarmTriggered(false));
        }
        self.notification_sent = false;
        self.door = door;
    }

    /// One blink cycle: buzzer on, LED inverted from rest for one half
    /// period, then back to rest for the other.
    fn alarm_cycle(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl PlatformSink,
        delay: &mut impl DelayNs,
    ) {
        sink.publish(Property::AlarmTriggered(true));

        hw.set_buzzer(true);
        hw.set_led(!self.state.commanded_light());
        delay.delay_ms(self.blink_half_period_ms);
        hw.set_led(self.state.commanded_light());
        delay.delay_ms(self.blink_half_period_ms);

        if self.notification_sent {
            debug!("Alarm active, alert already sent for this episode");
        } else {
            warn!("Intrusion detected: door opened while armed");
            sink.raise_alert(&self.alert_message);
            sink.diagnostic(DiagTag::SecurityAlert, format_args!("Intrusion detected"));
            self.notification_sent = true;
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Door state as of the last tick (`Unknown` before the first).
    pub fn door_state(&self) -> DoorState {
        self.door
    }

    /// Whether the alert for the current open episode has been sent.
    pub fn notification_sent(&self) -> bool {
        self.notification_sent
    }

    /// Total ticks executed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

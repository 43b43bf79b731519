//! Mock adapters for integration tests.
//!
//! Records every actuator call and sink publication so tests can assert on
//! the full history without touching real GPIO or a platform connection.
//! Shared with `tests/property_tests.rs`.

use std::sync::Arc;

use doorguard::app::commands::{Ack, Rejected, WriteCommand};
use doorguard::app::events::{DiagTag, Property};
use doorguard::app::handler::CommandHandler;
use doorguard::app::monitor::{AlarmMonitor, TickOutcome};
use doorguard::app::ports::{ActuatorPort, PlatformSink, SensorPort};
use doorguard::app::state::{DoorState, SharedState};
use doorguard::config::AlarmConfig;
use embedded_hal::delay::DelayNs;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Led(bool),
    Buzzer(bool),
}

// ── MockHardware ──────────────────────────────────────────────

/// Door sensor driven by `door_open`; outputs track the last write.
#[derive(Default)]
pub struct MockHardware {
    pub door_open: bool,
    pub led: bool,
    pub buzzer: bool,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn led_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Led(on) => Some(*on),
                ActuatorCall::Buzzer(_) => None,
            })
            .collect()
    }
}

impl SensorPort for MockHardware {
    fn read_sensor(&mut self) -> bool {
        self.door_open
    }
}

impl ActuatorPort for MockHardware {
    fn set_led(&mut self, on: bool) {
        self.led = on;
        self.calls.push(ActuatorCall::Led(on));
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer = on;
        self.calls.push(ActuatorCall::Buzzer(on));
    }
}

// ── MockSink ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    Property(Property),
    Alert(String),
    Diagnostic(DiagTag, String),
}

#[derive(Default)]
pub struct MockSink {
    pub events: Vec<Published>,
}

#[allow(dead_code)]
impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Published::Alert(_)))
            .count()
    }

    pub fn door_publications(&self) -> Vec<DoorState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Published::Property(Property::DoorStatus(d)) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn last_door_status(&self) -> Option<DoorState> {
        self.door_publications().last().copied()
    }

    pub fn last_triggered(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            Published::Property(Property::AlarmTriggered(v)) => Some(*v),
            _ => None,
        })
    }

    pub fn diagnostics(&self, tag: DiagTag) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Published::Diagnostic(t, m) if *t == tag => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PlatformSink for MockSink {
    fn publish(&mut self, property: Property) {
        self.events.push(Published::Property(property));
    }

    fn raise_alert(&mut self, message: &str) {
        self.events.push(Published::Alert(message.to_owned()));
    }

    fn diagnostic(&mut self, tag: DiagTag, message: core::fmt::Arguments<'_>) {
        self.events.push(Published::Diagnostic(tag, message.to_string()));
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested delays; no time passes.
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&d| u64::from(d)).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

// ── TestNode ──────────────────────────────────────────────────

/// Handler and monitor wired to one shared state and one set of mocks, so
/// tests can interleave writes and ticks the way the two contexts would.
pub struct TestNode {
    pub state: Arc<SharedState>,
    pub handler: CommandHandler,
    pub monitor: AlarmMonitor,
    pub hw: MockHardware,
    pub sink: MockSink,
    pub delay: MockDelay,
}

#[allow(dead_code)]
impl TestNode {
    pub fn new() -> Self {
        let state = Arc::new(SharedState::new());
        Self {
            handler: CommandHandler::new(Arc::clone(&state)),
            monitor: AlarmMonitor::new(Arc::clone(&state), &AlarmConfig::default()),
            state,
            hw: MockHardware::new(),
            sink: MockSink::new(),
            delay: MockDelay::new(),
        }
    }

    pub fn write(&mut self, device: &str, param: &str, value: bool) -> Result<Ack, Rejected> {
        let cmd = WriteCommand::new(device, param, value).expect("names fit");
        self.handler.handle_write(&cmd, &mut self.hw, &mut self.sink)
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.monitor.tick(&mut self.hw, &mut self.sink, &mut self.delay)
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }
}

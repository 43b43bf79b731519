//! Full host pipeline: param JSON → inbox → handler, monitor → uplink
//! channel → platform sink, over the simulated board pins.

use std::sync::Arc;
use std::time::Duration;

use doorguard::adapters::delay::TaskDelay;
use doorguard::adapters::hardware::HardwareAdapter;
use doorguard::adapters::params::{decode_writes, encode_property};
use doorguard::adapters::uplink::{self, ChannelSink};
use doorguard::adapters::inbox;
use doorguard::app::events::Property;
use doorguard::app::handler::CommandHandler;
use doorguard::app::monitor::AlarmMonitor;
use doorguard::app::state::{DoorState, SharedState, StopToken};
use doorguard::channels::{UplinkChannel, WriteChannel};
use doorguard::config::AlarmConfig;
use doorguard::drivers::hw_init;
use doorguard::drivers::task_pin::{Core, spawn_on_core};
use doorguard::pins;
use embassy_sync::channel::Channel;

use super::mock_hw::{MockSink, Published};

static WRITES: WriteChannel = Channel::new();
static UPLINK: UplinkChannel = Channel::new();

// The only test in this binary that touches the board pins.
#[test]
fn board_pipeline_arms_alarms_and_disarms() {
    hw_init::init_peripherals().unwrap();
    let state = Arc::new(SharedState::new());
    let handler = CommandHandler::new(Arc::clone(&state));
    let mut cmd_hw = HardwareAdapter::new();
    let mut cmd_sink = ChannelSink::new(&UPLINK);

    // Platform arms the alarm and turns the light on in one payload.
    for cmd in decode_writes(r#"{"Home Light":{"Power":true},"Alarm System":{"Power":true}}"#)
        .unwrap()
    {
        assert!(inbox::submit(&WRITES, cmd));
    }
    assert_eq!(inbox::drain(&WRITES, &handler, &mut cmd_hw, &mut cmd_sink), 2);
    assert!(hw_init::sim_level(pins::LED_GPIO));
    assert!(state.alarm_armed());

    // Monitor thread, real delays, door opened from the outside.
    hw_init::sim_set_input(pins::IR_SENSOR_GPIO, true);
    let stop = StopToken::new();
    let monitor = {
        let state = Arc::clone(&state);
        let stop = stop.clone();
        spawn_on_core(Core::App, 5, 4, "pipeline-monitor\0", move || {
            let mut mon = AlarmMonitor::new(state, &AlarmConfig::default());
            mon.run(
                &mut HardwareAdapter::new(),
                &mut ChannelSink::new(&UPLINK),
                &mut TaskDelay,
                &stop,
            );
        })
        .unwrap()
    };

    std::thread::sleep(Duration::from_millis(700));
    assert!(hw_init::sim_level(pins::BUZZER_GPIO), "buzzer sounds while armed and open");
    stop.cancel();
    monitor.join().unwrap();

    // Disarm through the inbox; buzzer off, LED back to the commanded level.
    inbox::submit(
        &WRITES,
        decode_writes(r#"{"Alarm System":{"Power":false}}"#).unwrap().remove(0),
    );
    inbox::drain(&WRITES, &handler, &mut cmd_hw, &mut cmd_sink);
    assert!(!hw_init::sim_level(pins::BUZZER_GPIO));
    assert!(hw_init::sim_level(pins::LED_GPIO));

    let mut platform = MockSink::new();
    uplink::drain(&UPLINK, &mut platform);
    assert_eq!(platform.alert_count(), 1);
    assert!(platform
        .events
        .contains(&Published::Property(Property::DoorStatus(DoorState::Open))));
    assert_eq!(
        platform.events.last(),
        Some(&Published::Property(Property::AlarmPower(false)))
    );

    hw_init::sim_set_input(pins::IR_SENSOR_GPIO, false);
}

#[test]
fn uplink_payloads_render_as_param_json() {
    static CH: UplinkChannel = Channel::new();
    let state = Arc::new(SharedState::new());
    let handler = CommandHandler::new(state);
    let mut sink = ChannelSink::new(&CH);

    let cmd = decode_writes(r#"{"Home Light":{"Power":true}}"#).unwrap().remove(0);
    handler
        .handle_write(&cmd, &mut super::mock_hw::MockHardware::new(), &mut sink)
        .unwrap();

    let mut platform = MockSink::new();
    uplink::drain(&CH, &mut platform);
    let json: Vec<String> = platform
        .events
        .iter()
        .filter_map(|e| match e {
            Published::Property(p) => Some(encode_property(p)),
            _ => None,
        })
        .collect();
    assert_eq!(json, vec![r#"{"Home Light":{"Power":true}}"#.to_string()]);
}

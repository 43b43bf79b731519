//! End-to-end alarm behaviour: handler writes interleaved with monitor ticks.

use doorguard::app::events::{DiagTag, Property};
use doorguard::app::monitor::TickOutcome;
use doorguard::app::state::DoorState;

use super::mock_hw::{ActuatorCall, Published, TestNode};

// ── Intrusion episode ─────────────────────────────────────────

#[test]
fn armed_open_close_open_raises_two_alerts() {
    let mut node = TestNode::new();
    node.tick();
    node.write("Alarm System", "Power", true).unwrap();

    // Door opens: triggered, buzzer on, one alert.
    node.hw.door_open = true;
    assert_eq!(node.tick(), TickOutcome::Alarming);
    assert_eq!(node.sink.last_triggered(), Some(true));
    assert!(node.hw.buzzer);
    assert_eq!(node.sink.alert_count(), 1);
    assert!(node.monitor.notification_sent());

    // Door closes: trigger cleared, buzzer off, latch reset.
    node.hw.door_open = false;
    assert_eq!(node.tick(), TickOutcome::Idle);
    assert_eq!(node.sink.last_triggered(), Some(false));
    assert_eq!(node.sink.last_door_status(), Some(DoorState::Closed));
    assert!(!node.hw.buzzer);
    assert!(!node.monitor.notification_sent());

    // Reopen: a new episode, a second alert.
    node.hw.door_open = true;
    node.tick();
    assert_eq!(node.sink.alert_count(), 2);
    assert_eq!(node.sink.diagnostics(DiagTag::SecurityAlert).len(), 2);
}

#[test]
fn continuous_open_episode_alerts_exactly_once() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.hw.door_open = true;

    node.ticks(25);

    assert_eq!(node.sink.alert_count(), 1);
    assert!(node.hw.buzzer);
    assert_eq!(node.sink.last_triggered(), Some(true));
    // Only the first tick saw an edge.
    assert_eq!(node.sink.door_publications(), vec![DoorState::Open]);
}

#[test]
fn alarm_blinks_at_half_period_around_rest_level() {
    let mut node = TestNode::new();
    node.write("Home Light", "Power", true).unwrap();
    node.write("Alarm System", "Power", true).unwrap();
    node.hw.door_open = true;
    node.hw.calls.clear();

    node.ticks(3);

    assert_eq!(node.delay.delays_ms, vec![150; 6]);
    // Inverted from rest (on) then back to rest, every cycle.
    assert_eq!(
        node.hw.led_writes(),
        vec![false, true, false, true, false, true]
    );
    assert!(node.hw.led, "LED ends each cycle at the commanded level");
}

#[test]
fn alert_carries_configured_message() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.hw.door_open = true;
    node.tick();

    assert!(node
        .sink
        .events
        .contains(&Published::Alert("Door opened while alarm is ON!".into())));
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn door_status_precedes_trigger_within_a_tick() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.sink.clear();
    node.hw.door_open = true;
    node.tick();

    let door = node
        .sink
        .events
        .iter()
        .position(|e| *e == Published::Property(Property::DoorStatus(DoorState::Open)))
        .unwrap();
    let triggered = node
        .sink
        .events
        .iter()
        .position(|e| *e == Published::Property(Property::AlarmTriggered(true)))
        .unwrap();
    assert!(door < triggered);
}

// ── Disarm ────────────────────────────────────────────────────

#[test]
fn disarm_during_alarm_resets_within_one_tick() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.hw.door_open = true;
    node.ticks(3);
    assert!(node.hw.buzzer);

    node.write("Alarm System", "Power", false).unwrap();
    // Door physically still open.
    node.sink.clear();
    assert_eq!(node.tick(), TickOutcome::Idle);

    assert!(!node.hw.buzzer);
    assert!(!node.hw.led);
    assert_eq!(node.sink.last_door_status(), Some(DoorState::Closed));
    assert_eq!(node.sink.last_triggered(), Some(false));
    assert!(!node.monitor.notification_sent());
}

#[test]
fn disarmed_node_republishes_reset_every_tick() {
    let mut node = TestNode::new();
    node.tick();
    node.sink.clear();

    node.ticks(4);

    assert_eq!(node.sink.door_publications(), vec![DoorState::Closed; 4]);
    assert_eq!(node.delay.delays_ms.len(), 5);
    assert!(node.delay.delays_ms.iter().all(|&d| d == 200));
}

#[test]
fn rearming_with_door_still_open_starts_new_episode() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.hw.door_open = true;
    node.tick();
    node.write("Alarm System", "Power", false).unwrap();
    node.tick();
    node.write("Alarm System", "Power", true).unwrap();
    node.tick();

    assert_eq!(node.sink.alert_count(), 2);
}

#[test]
fn rearming_with_door_open_keeps_last_door_status_closed() {
    let mut node = TestNode::new();
    node.hw.door_open = true;
    node.ticks(2);
    assert_eq!(node.sink.last_door_status(), Some(DoorState::Closed));

    node.sink.clear();
    node.write("Alarm System", "Power", true).unwrap();
    node.tick();

    // No door edge, so no fresh OPENED; the trigger and alert still go out.
    assert!(node.sink.door_publications().is_empty());
    assert_eq!(node.sink.last_triggered(), Some(true));
    assert_eq!(node.sink.alert_count(), 1);
}

// ── Light / alarm interaction ─────────────────────────────────

#[test]
fn light_then_arm_then_disarm_leaves_light_on() {
    let mut node = TestNode::new();
    node.write("Home Light", "Power", true).unwrap();
    node.write("Alarm System", "Power", true).unwrap();
    node.write("Alarm System", "Power", false).unwrap();

    assert!(node.hw.led);
    assert!(!node.hw.buzzer);
    assert_eq!(node.sink.last_door_status(), Some(DoorState::Closed));
    assert_eq!(node.sink.last_triggered(), Some(false));

    node.tick();
    assert!(node.hw.led);
    assert_eq!(node.hw.calls.last(), Some(&ActuatorCall::Led(true)));
}

#[test]
fn armed_closed_door_stays_quiet() {
    let mut node = TestNode::new();
    node.write("Alarm System", "Power", true).unwrap();
    node.ticks(10);

    assert_eq!(node.sink.alert_count(), 0);
    assert!(!node.hw.buzzer);
    assert_eq!(node.sink.door_publications(), vec![DoorState::Closed]);
}

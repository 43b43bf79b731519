//! Door-alarm node: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter    ChannelSink      LogPlatformSink         │
//! │  (Sensor+Actuator)  (PlatformSink)   (PlatformSink)          │
//! │  TaskDelay (DelayNs)   inbox / uplink forwarders             │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌─────────────────────┐        ┌──────────────────────┐     │
//! │  │   CommandHandler    │◀─────▶│    AlarmMonitor      │     │
//! │  │   (main thread)     │ Shared │  (pinned thread)     │     │
//! │  └─────────────────────┘ State  └──────────────────────┘     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;

use anyhow::Result;
use futures_lite::future::block_on;
use log::info;

use doorguard::adapters::delay::TaskDelay;
use doorguard::adapters::hardware::HardwareAdapter;
use doorguard::adapters::log_sink::LogPlatformSink;
use doorguard::adapters::uplink::{self, ChannelSink};
use doorguard::adapters::inbox;
use doorguard::app::handler::CommandHandler;
use doorguard::app::monitor::AlarmMonitor;
use doorguard::app::state::{SharedState, StopToken};
use doorguard::channels::{UPLINK_CHANNEL, WRITE_CHANNEL};
use doorguard::config::AlarmConfig;
use doorguard::drivers::hw_init;
use doorguard::drivers::task_pin::{Core, spawn_on_core};

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    // Optional JSON override baked in at build time.
    let config = AlarmConfig::load(option_env!("DOORGUARD_CONFIG"))?;

    info!("╔══════════════════════════════════════╗");
    info!("║  {} v{}", config.node_name, env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        log::error!("HAL init failed: {}, aborting", e);
        std::process::abort();
    }

    // ── 3. Shared state ───────────────────────────────────────
    let state = Arc::new(SharedState::new());

    // ── 4. Alarm monitor (pinned thread) ──────────────────────
    {
        let state = Arc::clone(&state);
        let config = config.clone();
        spawn_on_core(
            Core::App,
            config.monitor_priority,
            config.monitor_stack_kb,
            "door-monitor\0",
            move || {
                let mut monitor = AlarmMonitor::new(state, &config);
                monitor.run(
                    &mut HardwareAdapter::new(),
                    &mut ChannelSink::new(&UPLINK_CHANNEL),
                    &mut TaskDelay,
                    &StopToken::new(),
                );
            },
        )?;
    }

    // ── 5. Uplink forwarder ───────────────────────────────────
    spawn_on_core(
        Core::Pro,
        config.uplink_priority,
        config.uplink_stack_kb,
        "uplink\0",
        || {
            block_on(uplink::forward(&UPLINK_CHANNEL, &mut LogPlatformSink::new()));
        },
    )?;

    // ── 6. Host console (simulation only) ─────────────────────
    #[cfg(not(target_os = "espidf"))]
    std::thread::Builder::new()
        .name("console".into())
        .spawn(sim_console)?;

    info!("Smart Home System running.");

    // ── 7. Command context ────────────────────────────────────
    let handler = CommandHandler::new(state);
    block_on(inbox::serve(
        &WRITE_CHANNEL,
        &handler,
        &mut HardwareAdapter::new(),
        &mut ChannelSink::new(&UPLINK_CHANNEL),
    ));
    Ok(())
}

/// Reads stdin line by line: param JSON goes to the inbox, `open` / `close`
/// drive the simulated door sensor.
#[cfg(not(target_os = "espidf"))]
fn sim_console() {
    use std::io::BufRead;

    use doorguard::adapters::params::decode_writes;
    use doorguard::pins::IR_SENSOR_GPIO;
    use log::warn;

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "" => {}
            "open" => hw_init::sim_set_input(IR_SENSOR_GPIO, true),
            "close" => hw_init::sim_set_input(IR_SENSOR_GPIO, false),
            json => match decode_writes(json) {
                Ok(writes) => {
                    for cmd in writes {
                        inbox::submit(&WRITE_CHANNEL, cmd);
                    }
                }
                Err(e) => warn!("console: {}", e),
            },
        }
    }
}

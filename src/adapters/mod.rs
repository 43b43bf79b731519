//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                  |
//! |-------------|--------------------|------------------------------|
//! | `hardware`  | SensorPort         | IR door sensor GPIO          |
//! |             | ActuatorPort       | LED / buzzer GPIO            |
//! | `delay`     | DelayNs            | FreeRTOS task delay          |
//! | `log_sink`  | PlatformSink       | Serial log output            |
//! | `uplink`    | PlatformSink       | Bounded uplink channel       |
//! | `inbox`     | -                  | Write-command channel        |
//! | `params`    | -                  | Platform param JSON          |

pub mod delay;
pub mod hardware;
pub mod inbox;
pub mod log_sink;
pub mod params;
pub mod uplink;

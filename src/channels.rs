//! Inter-context communication channels.
//!
//! Uses `embassy-sync` bounded MPMC channels to bridge the platform glue
//! with the core.  Both directions are static, fixed-depth, heap-free.
//!
//! ```text
//! ┌──────────────┐  WriteCommand  ┌──────────────────┐
//! │   Platform   │──────────────▶│ Command context   │
//! │   glue       │◀──────────────│ + Alarm monitor   │
//! └──────────────┘     Uplink     └──────────────────┘
//! ```

use core::fmt::{self, Write};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::commands::WriteCommand;
use crate::app::events::{DiagTag, Property};

/// Capacity of alert and diagnostic message text.
pub const MESSAGE_CAP: usize = 64;

pub type Message = heapless::String<MESSAGE_CAP>;

/// One outbound message for the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Uplink {
    Property(Property),
    Alert(Message),
    Diagnostic { tag: DiagTag, message: Message },
}

/// Channel depth for inbound write-commands.
pub const WRITE_DEPTH: usize = 8;

/// Channel depth for outbound publications.  Sized for a burst of several
/// ticks while the uplink is stalled.
pub const UPLINK_DEPTH: usize = 32;

pub type WriteChannel = Channel<CriticalSectionRawMutex, WriteCommand, WRITE_DEPTH>;
pub type UplinkChannel = Channel<CriticalSectionRawMutex, Uplink, UPLINK_DEPTH>;

/// Inbound write-commands: platform glue → command context.
pub static WRITE_CHANNEL: WriteChannel = Channel::new();

/// Outbound publications: core → platform uplink.
pub static UPLINK_CHANNEL: UplinkChannel = Channel::new();

/// Render `args` into a [`Message`], cutting at the last char that fits.
pub fn truncated(args: fmt::Arguments<'_>) -> Message {
    struct Truncating {
        buf: Message,
        full: bool,
    }

    impl Write for Truncating {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for c in s.chars() {
                if self.full {
                    break;
                }
                self.full = self.buf.push(c).is_err();
            }
            Ok(())
        }
    }

    let mut out = Truncating {
        buf: Message::new(),
        full: false,
    };
    let _ = out.write_fmt(args);
    out.buf
}

//! Channel-backed platform sink and the uplink forwarder.
//!
//! [`ChannelSink`] is what the core publishes into: every call is a
//! non-blocking `try_send` onto a bounded channel.  A full channel (cloud
//! down, uplink stalled) drops the message with a warning.  At-most-once,
//! no retry.
//!
//! The forwarder on the other end drains the channel in FIFO order and
//! replays each message into the platform-facing sink, so the monitor's
//! publication order survives end to end.

use log::warn;

use crate::app::events::{DiagTag, Property};
use crate::app::ports::PlatformSink;
use crate::channels::{Uplink, UplinkChannel, truncated};

/// [`PlatformSink`] that queues onto an uplink channel.
#[derive(Clone, Copy)]
pub struct ChannelSink {
    channel: &'static UplinkChannel,
}

impl ChannelSink {
    pub fn new(channel: &'static UplinkChannel) -> Self {
        Self { channel }
    }

    fn send(&self, msg: Uplink) {
        if let Err(embassy_sync::channel::TrySendError::Full(dropped)) = self.channel.try_send(msg) {
            warn!("Uplink full, dropping {:?}", dropped);
        }
    }
}

impl PlatformSink for ChannelSink {
    fn publish(&mut self, property: Property) {
        self.send(Uplink::Property(property));
    }

    fn raise_alert(&mut self, message: &str) {
        self.send(Uplink::Alert(truncated(format_args!("{}", message))));
    }

    fn diagnostic(&mut self, tag: DiagTag, message: core::fmt::Arguments<'_>) {
        self.send(Uplink::Diagnostic {
            tag,
            message: truncated(message),
        });
    }
}

/// Replay one queued message into `sink`.
pub fn deliver(msg: &Uplink, sink: &mut impl PlatformSink) {
    match msg {
        Uplink::Property(p) => sink.publish(*p),
        Uplink::Alert(text) => sink.raise_alert(text),
        Uplink::Diagnostic { tag, message } => sink.diagnostic(*tag, format_args!("{}", message)),
    }
}

/// Deliver everything currently queued. Returns how many were delivered.
pub fn drain(channel: &'static UplinkChannel, sink: &mut impl PlatformSink) -> usize {
    let mut n = 0;
    while let Ok(msg) = channel.try_receive() {
        deliver(&msg, sink);
        n += 1;
    }
    n
}

/// Forward forever, waking only when something is queued.
pub async fn forward(channel: &'static UplinkChannel, sink: &mut impl PlatformSink) {
    loop {
        let msg = channel.receive().await;
        deliver(&msg, sink);
    }
}

//! Command inbox: platform glue → command context.
//!
//! The platform side decodes payloads and calls [`submit`]; the command
//! context runs [`serve`], which wakes on every queued write and hands it to
//! the [`CommandHandler`].  Commands are applied one at a time in arrival
//! order, never concurrently.

use log::{debug, warn};

use crate::app::commands::{Ack, WriteCommand};
use crate::app::handler::CommandHandler;
use crate::app::ports::{ActuatorPort, PlatformSink};
use crate::channels::WriteChannel;

/// Queue one write-command. Returns `false` if the inbox was full and the
/// command was dropped.
pub fn submit(channel: &'static WriteChannel, cmd: WriteCommand) -> bool {
    match channel.try_send(cmd) {
        Ok(()) => true,
        Err(embassy_sync::channel::TrySendError::Full(cmd)) => {
            warn!("Inbox full, dropping write {}/{}", cmd.device, cmd.param);
            false
        }
    }
}

fn apply(
    handler: &CommandHandler,
    cmd: &WriteCommand,
    hw: &mut impl ActuatorPort,
    sink: &mut impl PlatformSink,
) {
    match handler.handle_write(cmd, hw, sink) {
        Ok(Ack::Applied(target)) => debug!("Applied {:?} = {}", target, cmd.value),
        Ok(Ack::Ignored) => debug!("No handler for {}/{}", cmd.device, cmd.param),
        Err(rejected) => warn!("Write rejected: {}", rejected),
    }
}

/// Apply everything currently queued. Returns how many were applied.
pub fn drain(
    channel: &'static WriteChannel,
    handler: &CommandHandler,
    hw: &mut impl ActuatorPort,
    sink: &mut impl PlatformSink,
) -> usize {
    let mut n = 0;
    while let Ok(cmd) = channel.try_receive() {
        apply(handler, &cmd, hw, sink);
        n += 1;
    }
    n
}

/// Serve the inbox forever.
pub async fn serve(
    channel: &'static WriteChannel,
    handler: &CommandHandler,
    hw: &mut impl ActuatorPort,
    sink: &mut impl PlatformSink,
) {
    loop {
        let cmd = channel.receive().await;
        apply(handler, &cmd, hw, sink);
    }
}

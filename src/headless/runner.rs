//! Headless mode runner - command loop without a game client
//!
//! Reads one panel command per line and routes it for a single viewer.
//! After every command the host events it caused are written, followed by
//! an `outcome` event. Router errors are reported as non-fatal `error`
//! events and the loop continues.

use std::io::{BufRead, Write};

use modpanel_app::Router;
use modpanel_core::prelude::*;
use modpanel_core::Viewer;

use super::{EventLog, HeadlessEvent};

/// Pseudo-command that tears down the viewer's session like a disconnect
pub const DISCONNECT_COMMAND: &str = "disconnect";

/// Run the command loop until `input` is exhausted
pub fn run_headless(
    router: &mut Router,
    viewer: &Viewer,
    events: &EventLog,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    info!(
        "Headless panel for viewer {} ({}) starting",
        viewer.id, viewer.name
    );

    let mut handled = 0usize;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() || command.starts_with('#') {
            continue;
        }

        let outcome = if command == DISCONNECT_COMMAND {
            router.disconnect(viewer.id).map(|()| "Disconnected".to_string())
        } else {
            router
                .handle_command(viewer, command)
                .map(|outcome| format!("{:?}", outcome))
        };

        for event in events.drain() {
            event.write_to(&mut out)?;
        }
        match outcome {
            Ok(outcome) => HeadlessEvent::outcome(command, outcome).write_to(&mut out)?,
            Err(e) => {
                warn!("Command {:?} failed: {}", command, e);
                HeadlessEvent::error(e.to_string(), false).write_to(&mut out)?;
            }
        }
        handled += 1;
    }

    info!("Headless panel exiting after {} commands", handled);
    Ok(())
}

// Display commands read line by line from a text source, usually stdin.

use crate::core::display::DisplayCommand;
use std::io::BufRead;
use std::thread;
use tokio::sync::mpsc;

/// Sends every recognised command in `reader` to `tx`, in order.
///
/// Blank lines are skipped and unknown names are logged and skipped. Stops at
/// end of input, on a read error or once the receiver is gone. Returns the
/// number of commands sent.
pub fn forward_commands<R: BufRead>(
    reader: R,
    tx: &mpsc::UnboundedSender<DisplayCommand>,
) -> usize {
    let mut sent = 0;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Stopped reading display commands: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<DisplayCommand>() {
            Ok(command) => {
                if tx.send(command).is_err() {
                    tracing::debug!("Display command receiver dropped");
                    break;
                }
                sent += 1;
            }
            Err(e) => {
                tracing::warn!("⚠️ {}", e.user_friendly_message());
                tracing::warn!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    sent
}

/// Reads commands from `reader` on a plain OS thread.
///
/// A blocking read never holds up the async runtime, so the watch loop can
/// stop and the process exit while the reader is still waiting for input.
pub fn spawn_command_reader<R>(reader: R) -> mpsc::UnboundedReceiver<DisplayCommand>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    let spawned = thread::Builder::new()
        .name("display-commands".to_string())
        .spawn(move || {
            let sent = forward_commands(reader, &tx);
            tracing::debug!("Command reader finished after {} commands", sent);
        });

    if let Err(e) = spawned {
        // The sender went down with the closure, so the receiver reports closed.
        tracing::warn!("Display commands disabled, could not start reader: {}", e);
    }

    rx
}

//! Push channel from host threads to the UI loop.
//!
//! Senders enqueue a command and call the waker, which nudges the event
//! loop so the shell drains the queue on its next iteration instead of at
//! the next poll tick.

use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;

use pipeweaver_common::{NotificationCommand, ShellError};
use pipeweaver_shell::CommandSource;
use tracing::trace;

type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<NotificationCommand>,
    waker: Waker,
}

impl CommandSender {
    /// Queue a command and wake the UI loop. Returns `false` once the
    /// shell side is gone.
    pub fn send(&self, command: NotificationCommand) -> bool {
        if self.tx.send(command).is_err() {
            return false;
        }
        trace!(%command, "command queued");
        (self.waker)();
        true
    }
}

pub struct CommandReceiver {
    rx: mpsc::Receiver<NotificationCommand>,
}

impl CommandSource for CommandReceiver {
    fn check_notifications(&mut self) -> Result<Vec<NotificationCommand>, ShellError> {
        let mut pending = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(command) => pending.push(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) if pending.is_empty() => {
                    return Err(ShellError::HostUnavailable);
                }
                Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(pending)
    }
}

/// Create a connected sender/receiver pair. `waker` runs on the sending
/// thread after every successful send.
pub fn command_channel<F>(waker: F) -> (CommandSender, CommandReceiver)
where
    F: Fn() + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel();
    (
        CommandSender {
            tx,
            waker: Arc::new(waker),
        },
        CommandReceiver { rx },
    )
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A host-originated command for the window shell.
///
/// Transient: consumed at most once by the shell, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCommand {
    /// Un-minimize, raise, and focus the window.
    Activate,
    /// Close the window through the normal lifecycle path.
    Close,
}

impl NotificationCommand {
    /// Name of the trigger this command arrives on.
    pub fn trigger(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for NotificationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger())
    }
}

/// Reduce a batch of pending commands to the ones worth dispatching.
///
/// Distinct commands keep the order they were raised in; identical repeats
/// collapse onto the first occurrence. Nothing after a `Close` survives,
/// since the window is gone by then.
pub fn coalesce<I>(pending: I) -> Vec<NotificationCommand>
where
    I: IntoIterator<Item = NotificationCommand>,
{
    let mut out = Vec::new();
    for command in pending {
        if out.contains(&command) {
            continue;
        }
        out.push(command);
        if command == NotificationCommand::Close {
            break;
        }
    }
    out
}

//! Single-instance guard over a local socket.
//!
//! The first shell binds `<runtime_dir>/<app>.sock`. A second launch
//! connects, writes [`TRIGGER`], and exits; the first shell turns that
//! into an `Activate` command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pipeweaver_common::HostError;
use tracing::debug;

use crate::channel::CommandSender;

/// Payload a second instance sends to bring the first to the front.
pub const TRIGGER: &str = "TRIGGER";

/// How long a connected client may take to deliver its payload.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

#[cfg(unix)]
const MAX_MESSAGE_LEN: u64 = 64;

/// Socket location for `app_name`, falling back to the temp dir when the
/// session has no runtime dir.
pub fn socket_path(app_name: &str) -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(format!("{app_name}.sock"))
}

#[cfg(unix)]
mod imp {
    use std::io::Write;
    use std::os::unix::net::UnixStream;

    use pipeweaver_common::NotificationCommand;
    use tokio::io::AsyncReadExt;
    use tokio::net::UnixListener;
    use tracing::{debug, warn};

    use super::*;

    /// Ask a running instance to raise its window. Returns `true` if one
    /// answered. A stale socket file is removed.
    pub fn signal_active_instance(path: &Path) -> bool {
        if !path.exists() {
            debug!(path = %path.display(), "no instance socket present");
            return false;
        }

        match UnixStream::connect(path) {
            Ok(mut stream) => {
                debug!(path = %path.display(), "instance already running, sending trigger");
                if let Err(e) = stream.write_all(TRIGGER.as_bytes()) {
                    warn!(error = %e, "failed to send trigger to running instance");
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "removing stale instance socket");
                let _ = std::fs::remove_file(path);
                false
            }
        }
    }

    /// Bind the instance socket. Must be called inside a tokio runtime.
    pub fn bind(path: &Path) -> Result<UnixListener, HostError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if path.exists() {
            if std::os::unix::net::UnixStream::connect(path).is_ok() {
                return Err(HostError::AlreadyRunning);
            }
            let _ = std::fs::remove_file(path);
        }
        let listener = UnixListener::bind(path)?;
        debug!(path = %path.display(), "instance socket listening");
        Ok(listener)
    }

    /// Removes the socket file when the listener goes away, including when
    /// the runtime cancels the serving task on shutdown.
    struct SocketFile(PathBuf);

    impl Drop for SocketFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
            debug!(path = %self.0.display(), "instance socket closed");
        }
    }

    /// Accept connections until the shell stops listening for commands.
    /// A client gets [`READ_TIMEOUT`] to send its payload and close.
    pub async fn serve(listener: UnixListener, path: PathBuf, commands: CommandSender) {
        let _socket = SocketFile(path);
        loop {
            let stream = match listener.accept().await {
                Ok((stream, _)) => stream,
                Err(e) => {
                    warn!(error = %e, "instance socket accept failed");
                    break;
                }
            };

            let mut msg = String::new();
            let mut reader = stream.take(MAX_MESSAGE_LEN);
            match tokio::time::timeout(READ_TIMEOUT, reader.read_to_string(&mut msg)).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    warn!(error = %e, "failed to read instance message");
                    continue;
                }
                Err(_) => {
                    debug!("instance client went quiet, dropping it");
                    continue;
                }
            }

            if msg.trim() == TRIGGER && !commands.send(NotificationCommand::Activate) {
                break;
            }
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use super::*;

    pub fn signal_active_instance(_path: &Path) -> bool {
        false
    }

    pub struct Listener;

    pub fn bind(_path: &Path) -> Result<Listener, HostError> {
        Ok(Listener)
    }

    pub async fn serve(_listener: Listener, _path: PathBuf, _commands: CommandSender) {}
}

pub use imp::{bind, serve, signal_active_instance};

/// Bind the socket and serve it on the current tokio runtime.
pub fn spawn_listener(path: &Path, commands: CommandSender) -> Result<(), HostError> {
    let listener = bind(path)?;
    let path = path.to_path_buf();
    tokio::spawn(async move {
        serve(listener, path, commands).await;
    });
    debug!("instance listener spawned");
    Ok(())
}

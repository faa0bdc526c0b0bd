//! Liveness connection to the backend daemon.
//!
//! The shell only shows the daemon's UI, so it has no reason to outlive
//! it. A websocket is held open for the life of the window; when it drops
//! the shell is asked to close through its normal lifecycle.

use futures_util::{SinkExt, StreamExt};
use pipeweaver_common::{HostError, NotificationCommand};
use tokio::sync::oneshot;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{error, info, warn};

use crate::channel::CommandSender;

/// Connect to `url`, report the outcome on `ready`, then hold the
/// connection until it drops and push `Close`.
///
/// Nothing is pushed if the initial connect fails; the caller decides
/// whether that is fatal.
pub async fn monitor_daemon(
    url: String,
    ready: oneshot::Sender<Result<(), HostError>>,
    commands: CommandSender,
) {
    info!(%url, "connecting to daemon");
    let (ws, response) = match connect_async(url.as_str()).await {
        Ok(connected) => connected,
        Err(e) => {
            let _ = ready.send(Err(HostError::Connect(e.to_string())));
            return;
        }
    };

    info!(status = %response.status(), "connected to daemon");
    let _ = ready.send(Ok(()));

    let (mut sink, mut stream) = ws.split();
    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Ping(payload)) => {
                if let Err(e) = sink.send(Message::Pong(payload)).await {
                    warn!(error = %e, "failed to answer daemon ping");
                    break;
                }
            }
            Ok(Message::Close(_)) => {
                info!("daemon closed the connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "daemon connection lost");
                break;
            }
        }
    }

    info!("daemon gone, requesting close");
    commands.send(NotificationCommand::Close);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::command_channel;
    use pipeweaver_shell::CommandSource;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn unreachable_daemon_reports_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (tx, mut rx) = command_channel(|| {});
        let (ready_tx, ready_rx) = oneshot::channel();
        monitor_daemon(format!("ws://{addr}/api/websocket"), ready_tx, tx).await;

        let result = ready_rx.await.unwrap();
        assert!(matches!(result, Err(HostError::Connect(_))));
        assert!(rx.check_notifications().is_err());
    }

    #[tokio::test]
    async fn daemon_disconnect_requests_close() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (tcp, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(tcp).await.unwrap();
            ws.send(Message::Ping(vec![1, 2, 3].into())).await.unwrap();
            let pong = ws.next().await.unwrap().unwrap();
            assert!(matches!(pong, Message::Pong(_)));
            ws.close(None).await.unwrap();
        });

        let (woke_tx, mut woke_rx) = tokio::sync::mpsc::unbounded_channel();
        let (tx, mut rx) = command_channel(move || {
            let _ = woke_tx.send(());
        });
        let (ready_tx, ready_rx) = oneshot::channel();
        let monitor = tokio::spawn(monitor_daemon(
            format!("ws://{addr}/api/websocket"),
            ready_tx,
            tx,
        ));

        assert!(ready_rx.await.unwrap().is_ok());
        tokio::time::timeout(Duration::from_secs(5), woke_rx.recv())
            .await
            .expect("monitor never pushed a command");
        assert_eq!(
            rx.check_notifications().unwrap(),
            vec![NotificationCommand::Close]
        );

        server.await.unwrap();
        monitor.await.unwrap();
    }
}

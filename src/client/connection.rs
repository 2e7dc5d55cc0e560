//! Client connection manager
//!
//! Owns one persistent WebSocket to the poll server: establishes it, detects
//! loss, and retries with exponential backoff. Decoded events are forwarded on
//! a channel; malformed frames are logged and discarded without tearing the
//! connection down.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::api::websocket::events::WsMessage;

use super::backoff::{Backoff, BackoffConfig, ConnectionState};

/// Handle to a running connection loop
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) closes the
/// active connection and cancels any pending reconnect timer; no orphaned
/// retry fires after teardown.
pub struct ConnectionManager {
    events: mpsc::UnboundedReceiver<WsMessage>,
    status: watch::Receiver<ConnectionState>,
    shutdown_tx: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl ConnectionManager {
    /// Spawn the connection loop against `url` (e.g. `ws://host:port/ws`)
    pub fn connect(url: String, backoff: BackoffConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(ConnectionState::Disconnected);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(run_loop(url, backoff, event_tx, status_tx, shutdown_rx));

        Self {
            events: event_rx,
            status: status_rx,
            shutdown_tx,
            task,
        }
    }

    /// Receive the next decoded server message
    ///
    /// Returns `None` once the loop has shut down.
    pub async fn next_event(&mut self) -> Option<WsMessage> {
        self.events.recv().await
    }

    /// Current connection state
    pub fn state(&self) -> ConnectionState {
        *self.status.borrow()
    }

    /// Watch channel for connectivity-status indicators
    pub fn state_watch(&self) -> watch::Receiver<ConnectionState> {
        self.status.clone()
    }

    /// Tear down: close the connection and cancel any scheduled reconnect
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        let _ = (&mut self.task).await;
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn run_loop(
    url: String,
    config: BackoffConfig,
    events: mpsc::UnboundedSender<WsMessage>,
    status: watch::Sender<ConnectionState>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut backoff = Backoff::new(config);

    loop {
        let _ = status.send(ConnectionState::Connecting);

        let connected = tokio::select! {
            result = connect_async(url.as_str()) => result,
            _ = shutdown.changed() => break,
        };

        match connected {
            Ok((ws, _response)) => {
                info!(%url, "connected");
                backoff.record_success();
                let _ = status.send(ConnectionState::Connected);

                let stop = drive(ws, &events, &mut shutdown).await;
                let _ = status.send(ConnectionState::Disconnected);
                if stop {
                    break;
                }
                info!(%url, "connection lost, scheduling reconnect");
            }
            Err(err) => {
                warn!(%url, error = %err, "connect failed");
                let _ = status.send(ConnectionState::Disconnected);
            }
        }

        // Backoff sleep, cancelled immediately on teardown
        let delay = backoff.current_delay();
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown.changed() => break,
        }
        backoff.record_failure();
    }

    let _ = status.send(ConnectionState::Disconnected);
}

/// Pump one open connection until it drops or teardown is requested
///
/// Returns `true` when the loop should stop for good (teardown or the event
/// consumer went away), `false` on a transport-level disconnect.
async fn drive(
    ws: WsStream,
    events: &mpsc::UnboundedSender<WsMessage>,
    shutdown: &mut watch::Receiver<bool>,
) -> bool {
    let (mut write, mut read) = ws.split();

    loop {
        tokio::select! {
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<WsMessage>(&text) {
                            Ok(msg) => {
                                if events.send(msg).is_err() {
                                    return true; // Consumer gone, stop for good
                                }
                            }
                            Err(err) => {
                                // Discard, never surface to the user
                                debug!(error = %err, "discarding malformed frame");
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = write.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => return false,
                    Some(Err(err)) => {
                        debug!(error = %err, "websocket error");
                        return false;
                    }
                    Some(Ok(_)) => {} // Ignore binary and pong frames
                }
            }

            _ = shutdown.changed() => {
                let _ = write.send(Message::Close(None)).await;
                return true;
            }
        }
    }
}

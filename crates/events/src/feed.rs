//! The merged notification feed: REST snapshot plus live socket events.
//!
//! Merge order is fixed: the snapshot (newest first, as the backend lists
//! it) forms the base, live events are prepended on arrival, and duplicate
//! ids are dropped. That keeps the feed stable when an event arrives both
//! over the socket and in a subsequent refetch.

use atelier_core::notification::Notification;
use atelier_core::types::DbId;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use crate::client::NotificationSocket;
use crate::messages::{parse_message, ServerMessage};
use crate::reconnect::{reconnect_loop, ReconnectConfig};

// ---------------------------------------------------------------------------
// Feed state
// ---------------------------------------------------------------------------

/// In-memory notification list backing the dropdown.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the feed with a fresh REST snapshot (newest first).
    ///
    /// Live entries received before the snapshot are dropped: anything real
    /// is in the snapshot already, and anything missing was never persisted.
    pub fn apply_snapshot(&mut self, snapshot: Vec<Notification>) {
        self.entries = snapshot;
    }

    /// Prepend a live event. Returns `false` for a duplicate id, which is
    /// dropped.
    pub fn push_live(&mut self, notification: Notification) -> bool {
        if self.entries.iter().any(|n| n.id == notification.id) {
            return false;
        }
        self.entries.insert(0, notification);
        true
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_read(&mut self, id: DbId) {
        if let Some(n) = self.entries.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.entries {
            n.is_read = true;
        }
    }
}

// ---------------------------------------------------------------------------
// Live loop
// ---------------------------------------------------------------------------

/// Why a socket session ended.
enum SessionEnd {
    /// Connection closed or errored; reconnect.
    Disconnected,
    /// The receiving side is gone or we were cancelled; stop for good.
    Stop,
}

/// Run the live notification loop.
///
/// Connects (and reconnects, within the config's attempt budget per
/// outage), parses incoming frames and forwards each new notification to
/// `tx`. Returns when cancelled, when the receiver is dropped, or when an
/// outage outlives the attempt budget — the caller decides what to do next
/// (typically: surface "disconnected" and rely on snapshot refetches).
pub async fn run(
    socket: &NotificationSocket,
    config: &ReconnectConfig,
    tx: mpsc::Sender<Notification>,
    cancel: &CancellationToken,
) {
    loop {
        let Some(conn) = reconnect_loop(socket, config, cancel).await else {
            return;
        };

        match run_session(conn, &tx, cancel).await {
            SessionEnd::Disconnected => {
                tracing::warn!("Notification socket session ended, reconnecting");
            }
            SessionEnd::Stop => return,
        }
    }
}

/// Drive a single socket session until it ends.
async fn run_session(
    conn: crate::client::NotificationConnection,
    tx: &mpsc::Sender<Notification>,
    cancel: &CancellationToken,
) -> SessionEnd {
    let mut stream = conn.ws_stream;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Notification feed cancelled");
                return SessionEnd::Stop;
            }
            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match parse_message(&text) {
                            Ok(ServerMessage::NotificationNew(notification)) => {
                                tracing::debug!(id = notification.id, "Notification received");
                                if tx.send(notification).await.is_err() {
                                    // Receiver dropped; nobody is listening.
                                    return SessionEnd::Stop;
                                }
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, raw = %text, "Unknown or malformed socket message");
                            }
                        }
                    }
                    Some(Ok(Message::Ping(_) | Message::Pong(_))) => {
                        // Handled automatically by tungstenite.
                    }
                    Some(Ok(Message::Close(frame))) => {
                        tracing::info!(?frame, "Backend closed the notification socket");
                        return SessionEnd::Disconnected;
                    }
                    Some(Ok(_)) => {
                        // Binary / Frame — ignore.
                    }
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Notification socket receive error");
                        return SessionEnd::Disconnected;
                    }
                    None => {
                        tracing::info!("Notification socket stream exhausted");
                        return SessionEnd::Disconnected;
                    }
                }
            }
        }
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

//! WebSocket client for the backend notification socket.
//!
//! [`NotificationSocket`] holds the connection configuration. Call
//! [`NotificationSocket::connect`] to establish a live
//! [`NotificationConnection`]; the auth frame is sent as part of the
//! handshake, so a returned connection is already authenticated.

use futures::SinkExt;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream};

/// Configuration handle for the notification socket.
pub struct NotificationSocket {
    ws_url: String,
    token: String,
}

/// A live, authenticated WebSocket connection.
pub struct NotificationConnection {
    /// The raw WebSocket stream for reading frames.
    pub ws_stream: tokio_tungstenite::WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl NotificationSocket {
    /// Create a socket client.
    ///
    /// * `ws_url` - WebSocket endpoint, e.g. `ws://host:3000/ws`.
    /// * `token`  - bearer token of the authenticated session.
    pub fn new(ws_url: String, token: String) -> Self {
        Self { ws_url, token }
    }

    /// WebSocket endpoint URL.
    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    /// Connect and authenticate.
    ///
    /// The first frame sent is `{"auth":{"token":...}}`; the backend drops
    /// the connection if it never arrives, so it goes out before the
    /// connection is handed to the caller.
    pub async fn connect(&self) -> Result<NotificationConnection, SocketError> {
        let (mut ws_stream, _response) = connect_async(&self.ws_url).await.map_err(|e| {
            SocketError::Connection(format!(
                "Failed to connect to notification socket at {}: {e}",
                self.ws_url
            ))
        })?;

        let auth = serde_json::json!({ "auth": { "token": self.token } }).to_string();
        ws_stream
            .send(Message::Text(auth))
            .await
            .map_err(|e| SocketError::Protocol(format!("Failed to send auth frame: {e}")))?;

        tracing::info!("Connected to notification socket at {}", self.ws_url);

        Ok(NotificationConnection { ws_stream })
    }
}

/// Errors that can occur when working with the notification socket.
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    /// Failed to establish the initial WebSocket connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A protocol-level error on an already-established connection.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

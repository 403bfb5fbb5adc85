//! Socket message types and parser.
//!
//! The backend pushes JSON messages over WebSocket with the shape
//! `{"event": "<name>", "data": {...}}`. This module deserializes them into
//! a strongly-typed [`ServerMessage`] enum.

use atelier_core::notification::Notification;
use serde::Deserialize;

/// All known push message types.
///
/// Deserialized via the internally-tagged `"event"` field with associated
/// `"data"` content.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerMessage {
    /// A new notification for the authenticated user.
    #[serde(rename = "notification:new")]
    NotificationNew(Notification),
}

/// Parse a socket text message into a typed enum.
///
/// Returns `Err` for malformed JSON or unknown `event` values. Callers
/// should log unknown events and continue; the feed must survive the
/// backend growing new message types.
pub fn parse_message(text: &str) -> Result<ServerMessage, serde_json::Error> {
    serde_json::from_str(text)
}

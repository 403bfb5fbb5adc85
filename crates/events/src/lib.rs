//! Live notification stream for the atelier back-office.
//!
//! Building blocks:
//!
//! - [`NotificationSocket`] — WebSocket client; authenticates with an
//!   `{"auth":{"token":...}}` frame on connect.
//! - [`ServerMessage`] — typed push messages (`notification:new`).
//! - [`reconnect`] — bounded exponential-backoff reconnection.
//! - [`NotificationFeed`] — snapshot + live merge with duplicate dropping.
//!
//! Delivery is at-most-once best-effort: events missed while disconnected
//! are only recovered by the next REST snapshot fetch.

pub mod client;
pub mod feed;
pub mod messages;
pub mod reconnect;

pub use client::{NotificationConnection, NotificationSocket, SocketError};
pub use feed::NotificationFeed;
pub use messages::{parse_message, ServerMessage};
pub use reconnect::{reconnect_loop, ReconnectConfig};

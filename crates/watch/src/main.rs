//! `atelier-watch` -- headless notification watcher.
//!
//! Connects to the back-office API and its notification socket, seeds the
//! feed from the REST snapshot, then logs every live notification as it
//! arrives. Useful on a workshop machine without the web UI open: the
//! terminal shows what the dropdown would.
//!
//! # Environment variables
//!
//! | Variable          | Required | Description                                  |
//! |-------------------|----------|----------------------------------------------|
//! | `ATELIER_API_URL` | yes      | REST base URL, e.g. `http://host:3000/api`   |
//! | `ATELIER_WS_URL`  | yes      | Socket endpoint, e.g. `ws://host:3000/ws`    |
//! | `ATELIER_TOKEN`   | yes      | Bearer token of an authenticated session     |

use atelier_client::{ApiClient, Session};
use atelier_events::{NotificationFeed, NotificationSocket, ReconnectConfig};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn require_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::error!("{name} environment variable is required");
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_watch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = require_env("ATELIER_API_URL");
    let ws_url = require_env("ATELIER_WS_URL");
    let token = require_env("ATELIER_TOKEN");

    // A 401 anywhere means the token is dead; stop the whole watcher.
    let cancel = CancellationToken::new();
    let logout_cancel = cancel.clone();
    let session = Session::with_logout_hook(Some(token.clone()), move || {
        logout_cancel.cancel();
    });

    let api = match ApiClient::new(api_url, session) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build the HTTP client");
            std::process::exit(1);
        }
    };

    tracing::info!(ws_url = %ws_url, "Starting atelier-watch");

    let mut feed = NotificationFeed::new();
    match api.list_notifications().await {
        Ok(snapshot) => {
            feed.apply_snapshot(snapshot);
            tracing::info!(
                total = feed.entries().len(),
                unread = feed.unread_count(),
                "Notification snapshot loaded",
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Snapshot fetch failed, starting with an empty feed");
        }
    }

    let socket = NotificationSocket::new(ws_url, token);
    let config = ReconnectConfig::default();
    let (tx, mut rx) = mpsc::channel(64);

    let live_cancel = cancel.clone();
    let live = tokio::spawn(async move {
        atelier_events::feed::run(&socket, &config, tx, &live_cancel).await;
    });

    while let Some(notification) = rx.recv().await {
        let fresh = feed.push_live(notification.clone());
        if fresh {
            tracing::info!(
                kind = notification.kind.label(),
                title = %notification.title,
                message = %notification.message,
                unread = feed.unread_count(),
                "Notification",
            );
        }
    }

    live.await.ok();
    tracing::info!("atelier-watch stopped");
}

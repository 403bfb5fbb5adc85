//! Bounded exponential-backoff reconnection for the notification socket.
//!
//! When the connection drops, [`reconnect_loop`] retries with increasing
//! delays until the connection is restored, the attempt budget is spent, or
//! the [`CancellationToken`] is triggered. Delivery over the socket is
//! at-most-once: whatever happened while disconnected is only recovered by
//! the next snapshot fetch, never replayed.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::client::{NotificationConnection, NotificationSocket};

/// Tunable parameters for the backoff strategy.
pub struct ReconnectConfig {
    /// Delay before the second attempt (the first is immediate).
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
    /// Attempts per outage before giving up.
    pub max_attempts: u32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
            max_attempts: 10,
        }
    }
}

/// Calculate the next backoff delay from the current delay and config.
///
/// The result is clamped to [`ReconnectConfig::max_delay`].
pub fn next_delay(current: Duration, config: &ReconnectConfig) -> Duration {
    let next_ms = (current.as_millis() as f64 * config.multiplier) as u64;
    Duration::from_millis(next_ms).min(config.max_delay)
}

/// Attempt to (re)connect with bounded exponential backoff.
///
/// Returns `Some(connection)` once a connection succeeds, or `None` when
/// the attempt budget is exhausted or `cancel` is triggered first.
pub async fn reconnect_loop(
    socket: &NotificationSocket,
    config: &ReconnectConfig,
    cancel: &CancellationToken,
) -> Option<NotificationConnection> {
    let mut delay = config.initial_delay;

    for attempt in 1..=config.max_attempts {
        tracing::info!(
            attempt,
            max_attempts = config.max_attempts,
            "Connecting to notification socket",
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reconnect cancelled");
                return None;
            }
            result = socket.connect() => {
                match result {
                    Ok(conn) => {
                        tracing::info!(attempt, "Notification socket connected");
                        return Some(conn);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Connection attempt {attempt} failed");
                    }
                }
            }
        }

        if attempt == config.max_attempts {
            break;
        }

        // Wait before the next attempt, respecting cancellation.
        tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(delay) => {}
        }

        delay = next_delay(delay, config);
    }

    tracing::warn!(
        attempts = config.max_attempts,
        "Giving up on the notification socket",
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_delay_doubles() {
        let config = ReconnectConfig::default();
        let d = next_delay(Duration::from_secs(1), &config);
        assert_eq!(d, Duration::from_secs(2));
    }

    #[test]
    fn next_delay_clamps_at_max() {
        let config = ReconnectConfig {
            max_delay: Duration::from_secs(10),
            ..Default::default()
        };
        let d = next_delay(Duration::from_secs(8), &config);
        assert_eq!(d, Duration::from_secs(10));
    }

    #[test]
    fn full_backoff_sequence() {
        let config = ReconnectConfig::default();
        let mut delay = config.initial_delay;
        let expected = [1, 2, 4, 8, 16, 30, 30, 30];

        for &expected_secs in &expected {
            assert_eq!(delay.as_secs(), expected_secs);
            delay = next_delay(delay, &config);
        }
    }

    #[tokio::test]
    async fn cancellation_token_stops_reconnect() {
        let cancel = CancellationToken::new();
        // Cancel immediately — reconnect_loop should return None without
        // trying to connect.
        cancel.cancel();

        let socket = NotificationSocket::new("ws://localhost:9999".into(), "tok".into());
        let config = ReconnectConfig::default();

        let result = reconnect_loop(&socket, &config, &cancel).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn attempt_budget_is_bounded() {
        let cancel = CancellationToken::new();
        let socket = NotificationSocket::new("ws://127.0.0.1:1".into(), "tok".into());
        let config = ReconnectConfig {
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
            multiplier: 2.0,
            max_attempts: 2,
        };

        // Nothing listens on port 1; both attempts fail fast and the loop
        // must give up rather than retry forever.
        let result = reconnect_loop(&socket, &config, &cancel).await;
        assert!(result.is_none());
    }
}

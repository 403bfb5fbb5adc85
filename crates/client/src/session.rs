//! Auth session handle shared with the HTTP client.
//!
//! The token is injected explicitly into whatever needs it (no ambient
//! global), and forced logout is an explicit callback. A 401 from any
//! endpoint invalidates the session and fires the hook exactly once per
//! session lifetime, no matter how many in-flight requests hit the same
//! expired token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Callback invoked on forced logout (token rejected by the backend).
/// Typically clears UI state and navigates to the login screen.
pub type LogoutHook = Box<dyn Fn() + Send + Sync>;

pub struct Session {
    token: RwLock<Option<String>>,
    on_forced_logout: Option<LogoutHook>,
    invalidated: AtomicBool,
}

impl Session {
    /// Session without a forced-logout hook (headless tools, tests).
    pub fn new(token: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            token: RwLock::new(token),
            on_forced_logout: None,
            invalidated: AtomicBool::new(false),
        })
    }

    /// Session with a forced-logout hook.
    pub fn with_logout_hook(
        token: Option<String>,
        hook: impl Fn() + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            token: RwLock::new(token),
            on_forced_logout: Some(Box::new(hook)),
            invalidated: AtomicBool::new(false),
        })
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a fresh token after a successful login. Re-arms the forced
    /// logout hook for the new session lifetime.
    pub fn log_in(&self, token: String) {
        *self.token.write().expect("session lock poisoned") = Some(token);
        self.invalidated.store(false, Ordering::SeqCst);
    }

    /// User-initiated logout: clears the token without firing the hook
    /// (the caller is already navigating away).
    pub fn log_out(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    /// Forced logout on a 401: clears the token and fires the hook exactly
    /// once, regardless of which request triggered it.
    pub fn invalidate(&self) {
        *self.token.write().expect("session lock poisoned") = None;

        if !self.invalidated.swap(true, Ordering::SeqCst) {
            tracing::warn!("Session rejected by the backend, forcing logout");
            if let Some(hook) = &self.on_forced_logout {
                hook();
            }
        }
    }
}

//! REST client for the atelier back-office API.
//!
//! The backend is the single source of truth; this crate is transport only:
//! bearer-authenticated requests, the `{ success, data, error }` envelope,
//! and a 401 interceptor that invalidates the shared [`Session`] exactly
//! once. Endpoint methods are grouped per resource in `impl ApiClient`
//! blocks across the modules.

pub mod auth;
pub mod caisse;
pub mod devis;
pub mod directory;
pub mod envelope;
pub mod error;
pub mod expenses;
pub mod http;
pub mod invoices;
pub mod notifications;
pub mod session;

pub use error::ApiError;
pub use http::ApiClient;
pub use invoices::PdfDownload;
pub use session::Session;

//! Invoice endpoints, including batch creation from devis and the PDF
//! download.

use std::io;
use std::path::{Path, PathBuf};

use atelier_core::invoicing::{CreateInvoicePayload, Invoice};
use atelier_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

/// A downloaded invoice PDF, ready to be saved client-side.
#[derive(Debug)]
pub struct PdfDownload {
    /// Suggested file name, `<reference>.pdf`.
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfDownload {
    /// Write the PDF into `dir` under its suggested file name.
    pub async fn save_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(path = %path.display(), "Invoice PDF saved");
        Ok(path)
    }
}

impl ApiClient {
    /// GET /invoices
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("/invoices").await
    }

    /// GET /invoices/{id}
    pub async fn get_invoice(&self, id: DbId) -> Result<Invoice, ApiError> {
        self.get_json(&format!("/invoices/{id}")).await
    }

    /// POST /invoices/from-devis — batch create one invoice from the
    /// selected devis ids.
    ///
    /// The payload comes from
    /// [`InvoiceSelection::build_payload`](atelier_core::invoicing::InvoiceSelection::build_payload),
    /// which has already enforced the single-client rule; the backend checks
    /// it again and is authoritative. All-or-nothing: there is no per-devis
    /// failure reporting.
    pub async fn create_invoice_from_devis(
        &self,
        payload: &CreateInvoicePayload,
    ) -> Result<Invoice, ApiError> {
        self.post_json("/invoices/from-devis", payload).await
    }

    /// GET /invoices/{id}/pdf — binary blob.
    pub async fn download_invoice_pdf(
        &self,
        id: DbId,
        reference: &str,
    ) -> Result<PdfDownload, ApiError> {
        let bytes = self.get_bytes(&format!("/invoices/{id}/pdf")).await?;
        Ok(PdfDownload {
            filename: format!("{reference}.pdf"),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_filename_follows_the_reference() {
        let download = PdfDownload {
            filename: format!("{}.pdf", "FAC-2026-0007"),
            bytes: Vec::new(),
        };
        assert_eq!(download.filename, "FAC-2026-0007.pdf");
    }
}

//! Caisse endpoints: payments, period summary and financial closures.

use atelier_core::closure::{CreateClosurePayload, FinancialClosure};
use atelier_core::date_filter::DateRangeFilter;
use atelier_core::forms::PaymentForm;
use atelier_core::payment::{CaisseSummary, Payment, PaymentStats};
use atelier_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Render the optional date bounds as a query string (empty when the filter
/// is inactive).
fn period_query(filter: &DateRangeFilter) -> String {
    match (filter.start(), filter.end()) {
        (Some(start), Some(end)) => format!("?start={start}&end={end}"),
        (Some(start), None) => format!("?start={start}"),
        (None, Some(end)) => format!("?end={end}"),
        (None, None) => String::new(),
    }
}

impl ApiClient {
    /// POST /invoices/{id}/payments — record a payment on an invoice.
    pub async fn record_invoice_payment(
        &self,
        invoice_id: DbId,
        form: &PaymentForm,
    ) -> Result<Payment, ApiError> {
        self.post_json(&format!("/invoices/{invoice_id}/payments"), form)
            .await
    }

    /// POST /devis/{id}/payments — the caisse flow: a payment recorded
    /// directly against a devis.
    pub async fn record_devis_payment(
        &self,
        devis_id: DbId,
        form: &PaymentForm,
    ) -> Result<Payment, ApiError> {
        self.post_json(&format!("/devis/{devis_id}/payments"), form)
            .await
    }

    /// GET /invoices/{id}/payments/stats
    pub async fn invoice_payment_stats(&self, invoice_id: DbId) -> Result<PaymentStats, ApiError> {
        self.get_json(&format!("/invoices/{invoice_id}/payments/stats"))
            .await
    }

    /// GET /caisse/summary — income/expense totals for the filtered period.
    pub async fn caisse_summary(
        &self,
        filter: &DateRangeFilter,
    ) -> Result<CaisseSummary, ApiError> {
        self.get_json(&format!("/caisse/summary{}", period_query(filter)))
            .await
    }

    /// GET /caisse/closures
    pub async fn list_closures(&self) -> Result<Vec<FinancialClosure>, ApiError> {
        self.get_json("/caisse/closures").await
    }

    /// POST /caisse/closures — close a period into an audit snapshot.
    ///
    /// Closures are append-only: there is deliberately no update or delete
    /// counterpart here.
    pub async fn create_closure(
        &self,
        payload: &CreateClosurePayload,
    ) -> Result<FinancialClosure, ApiError> {
        self.post_json("/caisse/closures", payload).await
    }
}

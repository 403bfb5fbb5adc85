//! Local `.xlsx` report generation.
//!
//! Reports are built entirely from in-memory rows the views already hold;
//! there is no server round-trip and no recomputation — amounts land in the
//! sheet exactly as the backend provided them.

use atelier_core::devis::Devis;
use xlsxwriter::Workbook;

/// Errors from workbook generation.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Workbook error: {0}")]
    Xlsx(#[from] xlsxwriter::XlsxError),
}

/// Direction of a caisse ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaisseEntryKind {
    Encaissement,
    Depense,
}

impl CaisseEntryKind {
    pub fn label(self) -> &'static str {
        match self {
            CaisseEntryKind::Encaissement => "Encaissement",
            CaisseEntryKind::Depense => "Dépense",
        }
    }
}

/// One row of the caisse ledger report, as displayed in the view.
#[derive(Debug, Clone)]
pub struct CaisseRow {
    /// Display date (already formatted by the view).
    pub date: String,
    pub label: String,
    pub kind: CaisseEntryKind,
    pub amount: f64,
}

/// Write the devis listing to `path` as a one-sheet workbook.
pub fn write_devis_report(path: &str, devis: &[Devis]) -> Result<(), ExportError> {
    let workbook = Workbook::new(path)?;
    let mut sheet = workbook.add_worksheet(Some("Devis"))?;

    let headers = ["Référence", "Client", "Statut", "Montant total"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, header, None)?;
    }

    for (i, d) in devis.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &d.reference, None)?;
        let client_name = d.client.as_ref().map(|c| c.name.as_str()).unwrap_or("");
        sheet.write_string(row, 1, client_name, None)?;
        sheet.write_string(row, 2, d.status.label(), None)?;
        sheet.write_number(row, 3, d.total_amount, None)?;
    }

    workbook.close()?;
    tracing::info!(path, rows = devis.len(), "Devis report written");
    Ok(())
}

/// Write the caisse ledger to `path` as a one-sheet workbook.
pub fn write_caisse_report(path: &str, rows: &[CaisseRow]) -> Result<(), ExportError> {
    let workbook = Workbook::new(path)?;
    let mut sheet = workbook.add_worksheet(Some("Caisse"))?;

    let headers = ["Date", "Libellé", "Type", "Montant"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, header, None)?;
    }

    for (i, entry) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &entry.date, None)?;
        sheet.write_string(row, 1, &entry.label, None)?;
        sheet.write_string(row, 2, entry.kind.label(), None)?;
        sheet.write_number(row, 3, entry.amount, None)?;
    }

    workbook.close()?;
    tracing::info!(path, rows = rows.len(), "Caisse report written");
    Ok(())
}

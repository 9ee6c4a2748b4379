// LeadDeck - core/export.rs
//
// CSV export of the visible leads.
// Core layer: writes to any Write trait object.

use crate::core::model::Lead;
use crate::util::constants;
use crate::util::error::ExportError;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::Path;

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 3] = ["Lead", "Connected With", "Date"];

/// One exported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub lead: String,
    pub connected_with: String,
    /// "<weekday> <date>"
    pub date: String,
}

impl From<&Lead> for ExportRow {
    fn from(lead: &Lead) -> Self {
        Self {
            lead: lead.name.clone(),
            connected_with: lead.name.clone(),
            date: format!("{} {}", lead.weekday, lead.date),
        }
    }
}

/// Map visible leads to export rows. An empty input is rejected so no
/// artifact is ever produced for it.
pub fn build_rows(leads: &[&Lead]) -> Result<Vec<ExportRow>, ExportError> {
    if leads.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    Ok(leads.iter().map(|lead| ExportRow::from(*lead)).collect())
}

/// `leads_export_<YYYYMMDD_HHmm>_<count>_records.csv`
pub fn export_filename(timestamp: NaiveDateTime, count: usize) -> String {
    format!(
        "leads_export_{}_{count}_records.csv",
        timestamp.format(constants::EXPORT_TIMESTAMP_FORMAT)
    )
}

/// Write rows as CSV with a header row. Returns the number of data rows.
///
/// `export_path` is only used for error context.
pub fn export_csv<W: Write>(
    rows: &[ExportRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer.write_record(EXPORT_HEADERS).map_err(csv_err)?;

    for row in rows {
        csv_writer
            .write_record([&row.lead, &row.connected_with, &row.date])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(rows.len())
}

// LeadDeck - app/export.rs
//
// Export of the store's visible set to a CSV file on disk.
// An empty visible set is rejected before the filesystem is touched.

use crate::app::state::LeadStore;
use crate::core::export;
use crate::platform::fs;
use crate::util::error::ExportError;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub count: usize,
}

/// Write the visible leads to `<dir>/leads_export_<ts>_<count>_records.csv`.
///
/// The store is only read.
pub fn export_visible(
    store: &LeadStore,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<ExportOutcome, ExportError> {
    let visible = store.visible();
    let rows = export::build_rows(&visible)?;

    let path = dir.join(export::export_filename(now, rows.len()));
    fs::ensure_dir(dir)?;
    let file = fs::create_export_file(&path)?;
    let count = export::export_csv(&rows, file, &path)?;

    tracing::info!(path = %path.display(), count, "Exported visible leads");
    Ok(ExportOutcome { path, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::RawRecord;
    use crate::core::tagging::CyclicTagPolicy;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_export_writes_visible_only() {
        let mut store = LeadStore::new();
        store.load(
            vec![
                RawRecord {
                    id: 1,
                    name: "Leanne Graham".to_string(),
                    email: "sincere@april.biz".to_string(),
                    connected: true,
                },
                RawRecord {
                    id: 2,
                    name: "Ervin Howell".to_string(),
                    email: "shanna@melissa.tv".to_string(),
                    connected: false,
                },
            ],
            &mut CyclicTagPolicy,
        );
        store.set_search_term("ervin");

        let dir = tempfile::tempdir().unwrap();
        let outcome = export_visible(&store, dir.path(), now()).unwrap();
        assert_eq!(outcome.count, 1);
        assert_eq!(
            outcome.path.file_name().unwrap().to_str().unwrap(),
            "leads_export_20250804_1430_1_records.csv"
        );

        let content = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(content.contains("Ervin Howell"));
        assert!(!content.contains("Leanne Graham"));
    }

    #[test]
    fn test_empty_export_produces_no_file() {
        let store = LeadStore::new();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let result = export_visible(&store, &target, now());
        assert!(matches!(result, Err(ExportError::NothingToExport)));
        assert!(!target.exists());
    }
}

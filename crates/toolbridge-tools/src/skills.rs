//! Reusable skills composed from the typed wrappers.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use toolbridge_core::GatewayError;
use toolbridge_gateway::Gateway;

use crate::google_drive::{self, GetSheetInput};

/// Errors from skill execution.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The underlying tool call failed
    #[error("gateway call failed: {0}")]
    Gateway(#[from] GatewayError),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Download a Google Sheet and save it as a CSV file.
///
/// The file is written to `output_dir` (created if missing) as
/// `sheet-<id>.csv`, with a header row equal to the keys of the first
/// record and one row per record. An empty sheet writes no file; the
/// would-be path is still returned.
pub async fn save_sheet_as_csv(
    gateway: &Gateway,
    sheet_id: &str,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, SkillError> {
    let sheet = google_drive::get_sheet(
        gateway,
        GetSheetInput {
            sheet_id: sheet_id.to_string(),
        },
    )
    .await?;

    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;
    let file_path = output_dir.join(format!("sheet-{sheet_id}.csv"));

    if let Some(first) = sheet.rows.first() {
        let headers: Vec<&str> = first.keys().map(String::as_str).collect();

        let mut writer = csv::Writer::from_path(&file_path)?;
        writer.write_record(&headers)?;
        for row in &sheet.rows {
            let record: Vec<String> = headers
                .iter()
                .map(|header| cell_text(row.get(*header)))
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;

        debug!(path = %file_path.display(), rows = sheet.rows.len(), "saved sheet as CSV");
    }

    Ok(file_path)
}

/// Render one cell; strings are written bare, other values as their JSON
/// text, absent cells as empty.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;
    use toolbridge_core::BackingStore;

    fn gateway() -> Gateway {
        Gateway::with_latency(BackingStore::with_fixtures(), Duration::from_millis(1))
    }

    #[tokio::test]
    async fn exports_header_and_one_line_per_row() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let gateway = gateway();

        let path = save_sheet_as_csv(&gateway, "abc123", dir.path())
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "sheet-abc123.csv");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Order ID,Status,Amount,Customer");
        assert_eq!(lines[1], "1001,pending,150.0,Acme Corp");
    }

    #[tokio::test]
    async fn empty_sheet_writes_no_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let gateway = gateway();

        let path = save_sheet_as_csv(&gateway, "does-not-exist", dir.path())
            .await
            .unwrap();

        assert!(!path.exists());
    }
}

//! Append-only record of write-style tool calls.
//!
//! The ledger exists so demos and tests can inspect side effects after the
//! fact. It is shared by handle, not by process-global state, and appends
//! happen under a mutex so a multi-threaded runtime keeps them atomic.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tool::ToolId;

/// One recorded side-effecting call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// The tool that performed the update
    pub tool: ToolId,
    /// Object type the update targeted (e.g. `Lead`)
    pub object_type: String,
    /// Identifier of the updated record
    pub record_id: String,
    /// The field data that was written
    pub data: Value,
}

/// Append-only ledger of update-class calls.
///
/// Length equals the number of successful write-style calls since the last
/// [`UpdateLedger::clear`].
#[derive(Debug, Default)]
pub struct UpdateLedger {
    entries: Mutex<Vec<UpdateRecord>>,
}

impl UpdateLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an update record.
    pub fn record(&self, update: UpdateRecord) {
        self.entries.lock().unwrap().push(update);
    }

    /// Get all recorded updates, oldest first.
    ///
    /// Returns a defensive copy; mutating the returned vector does not
    /// affect the ledger.
    pub fn list_all(&self) -> Vec<UpdateRecord> {
        self.entries.lock().unwrap().clone()
    }

    /// Remove all recorded updates.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of recorded updates since the last clear.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::KnownTool;
    use serde_json::json;

    fn sample(record_id: &str) -> UpdateRecord {
        UpdateRecord {
            tool: KnownTool::UpdateRecord.into(),
            object_type: "Lead".to_string(),
            record_id: record_id.to_string(),
            data: json!({ "Email": "x@example.com" }),
        }
    }

    #[test]
    fn ledger_records_in_call_order() {
        let ledger = UpdateLedger::new();
        ledger.record(sample("L001"));
        ledger.record(sample("L002"));

        let entries = ledger.list_all();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].record_id, "L001");
        assert_eq!(entries[1].record_id, "L002");
    }

    #[test]
    fn clear_empties_the_ledger() {
        let ledger = UpdateLedger::new();
        ledger.record(sample("L001"));
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.list_all().len(), 0);
    }

    #[test]
    fn list_all_returns_a_defensive_copy() {
        let ledger = UpdateLedger::new();
        ledger.record(sample("L001"));

        let mut copy = ledger.list_all();
        copy.clear();
        copy.push(sample("L999"));

        let entries = ledger.list_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record_id, "L001");
    }
}

//! Built-in mock handlers.
//!
//! Each handler reproduces one remote tool against the injected backing
//! store. The per-tool "not found" shapes are deliberately inconsistent
//! and preserved as such: document reads return a sentinel string, while
//! sheet, query, and history reads return empty collections.

use std::sync::Arc;

use serde_json::{Value, json};
use toolbridge_core::{
    BackingStore, GatewayResult, KnownTool, ToolParams, ToolResponse, UpdateLedger, UpdateRecord,
};

use crate::handler::ToolHandler;

/// Sentinel content returned for unknown document ids.
pub const DOCUMENT_NOT_FOUND: &str = "Document not found";

fn body(value: Value) -> ToolResponse {
    match value {
        Value::Object(map) => map,
        _ => ToolResponse::new(),
    }
}

/// `google_drive__get_document`: canned document content by id.
pub struct GetDocumentHandler {
    store: Arc<BackingStore>,
}

impl GetDocumentHandler {
    pub fn new(store: Arc<BackingStore>) -> Self {
        Self { store }
    }
}

impl ToolHandler for GetDocumentHandler {
    fn tool(&self) -> KnownTool {
        KnownTool::GetDocument
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[("documentId", "document_id")]
    }

    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse> {
        let content = params
            .str_value("document_id")
            .and_then(|id| self.store.document(id))
            .unwrap_or(DOCUMENT_NOT_FOUND);
        Ok(body(json!({ "content": content })))
    }
}

/// `google_drive__get_sheet`: canned sheet rows by id.
pub struct GetSheetHandler {
    store: Arc<BackingStore>,
}

impl GetSheetHandler {
    pub fn new(store: Arc<BackingStore>) -> Self {
        Self { store }
    }
}

impl ToolHandler for GetSheetHandler {
    fn tool(&self) -> KnownTool {
        KnownTool::GetSheet
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[("sheetId", "sheet_id")]
    }

    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse> {
        let rows = params
            .str_value("sheet_id")
            .and_then(|id| self.store.sheet(id))
            .unwrap_or(&[]);
        Ok(body(json!({ "rows": rows })))
    }
}

/// `salesforce__query`: free-text query against canned record sets.
///
/// The mock recognizes queries mentioning `Lead` and returns the `leads`
/// set; anything else yields an empty result.
pub struct QueryHandler {
    store: Arc<BackingStore>,
}

impl QueryHandler {
    pub fn new(store: Arc<BackingStore>) -> Self {
        Self { store }
    }
}

impl ToolHandler for QueryHandler {
    fn tool(&self) -> KnownTool {
        KnownTool::Query
    }

    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse> {
        let query = params.str_value("query").unwrap_or("");
        let records = if query.contains("Lead") {
            self.store.record_set("leads").unwrap_or(&[])
        } else {
            &[]
        };
        Ok(body(json!({ "records": records })))
    }
}

/// `salesforce__update_record`: append an update to the ledger and echo
/// the record id back as an acknowledgment.
pub struct UpdateRecordHandler {
    ledger: Arc<UpdateLedger>,
}

impl UpdateRecordHandler {
    pub fn new(ledger: Arc<UpdateLedger>) -> Self {
        Self { ledger }
    }
}

impl ToolHandler for UpdateRecordHandler {
    fn tool(&self) -> KnownTool {
        KnownTool::UpdateRecord
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[("objectType", "object_type"), ("recordId", "record_id")]
    }

    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse> {
        let object_type = params.str_value("object_type").unwrap_or_default().to_string();
        let record_id = params.str_value("record_id").unwrap_or_default().to_string();
        let data = params.value("data").cloned().unwrap_or(Value::Null);

        self.ledger.record(UpdateRecord {
            tool: KnownTool::UpdateRecord.into(),
            object_type,
            record_id: record_id.clone(),
            data,
        });

        Ok(body(json!({ "success": true, "record_id": record_id })))
    }
}

/// `slack__get_channel_history`: canned message history by channel.
pub struct GetChannelHistoryHandler {
    store: Arc<BackingStore>,
}

impl GetChannelHistoryHandler {
    pub fn new(store: Arc<BackingStore>) -> Self {
        Self { store }
    }
}

impl ToolHandler for GetChannelHistoryHandler {
    fn tool(&self) -> KnownTool {
        KnownTool::GetChannelHistory
    }

    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse> {
        let messages = params
            .str_value("channel")
            .and_then(|channel| self.store.channel(channel))
            .unwrap_or(&[]);
        Ok(body(json!({ "messages": messages })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_handler_returns_sentinel_for_unknown_id() {
        let handler = GetDocumentHandler::new(Arc::new(BackingStore::with_fixtures()));
        let params = ToolParams::new().with("document_id", json!("missing"));

        let response = handler.handle(&params).unwrap();
        assert_eq!(
            response.get("content").and_then(Value::as_str),
            Some(DOCUMENT_NOT_FOUND)
        );
    }

    #[test]
    fn document_handler_tolerates_missing_parameter() {
        let handler = GetDocumentHandler::new(Arc::new(BackingStore::with_fixtures()));

        let response = handler.handle(&ToolParams::new()).unwrap();
        assert_eq!(
            response.get("content").and_then(Value::as_str),
            Some(DOCUMENT_NOT_FOUND)
        );
    }

    #[test]
    fn sheet_handler_returns_empty_rows_for_unknown_id() {
        let handler = GetSheetHandler::new(Arc::new(BackingStore::with_fixtures()));
        let params = ToolParams::new().with("sheet_id", json!("missing"));

        let response = handler.handle(&params).unwrap();
        let rows = response.get("rows").and_then(Value::as_array).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn query_handler_matches_lead_queries_only() {
        let handler = QueryHandler::new(Arc::new(BackingStore::with_fixtures()));

        let leads = handler
            .handle(&ToolParams::new().with("query", json!("SELECT Id FROM Lead LIMIT 10")))
            .unwrap();
        assert_eq!(
            leads.get("records").and_then(Value::as_array).unwrap().len(),
            3
        );

        let none = handler
            .handle(&ToolParams::new().with("query", json!("SELECT Id FROM Account")))
            .unwrap();
        assert!(none.get("records").and_then(Value::as_array).unwrap().is_empty());
    }

    #[test]
    fn update_handler_appends_and_echoes_record_id() {
        let ledger = Arc::new(UpdateLedger::new());
        let handler = UpdateRecordHandler::new(Arc::clone(&ledger));

        let params = ToolParams::new()
            .with("object_type", json!("Lead"))
            .with("record_id", json!("L001"))
            .with("data", json!({ "Email": "x@example.com" }));

        let response = handler.handle(&params).unwrap();
        assert_eq!(response.get("success"), Some(&json!(true)));
        assert_eq!(response.get("record_id"), Some(&json!("L001")));

        let entries = ledger.list_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].record_id, "L001");
        assert_eq!(entries[0].object_type, "Lead");
        assert_eq!(entries[0].tool.as_str(), "salesforce__update_record");
    }
}

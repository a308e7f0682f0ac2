//! Google Drive tool wrappers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolbridge_core::{GatewayResult, KnownTool, ToolParams};
use toolbridge_gateway::Gateway;

/// Input for [`get_document`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDocumentInput {
    /// The document to read
    #[serde(alias = "documentId")]
    pub document_id: String,
}

/// Response from [`get_document`].
///
/// An unknown document id yields the sentinel content `Document not found`
/// rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDocumentResponse {
    /// Full document content
    pub content: String,
}

/// Read a document from Google Drive.
pub async fn get_document(
    gateway: &Gateway,
    input: GetDocumentInput,
) -> GatewayResult<GetDocumentResponse> {
    let params = ToolParams::from_serialize(&input)?;
    let response = gateway.invoke(KnownTool::GetDocument.name(), params).await?;
    Ok(serde_json::from_value(Value::Object(response))?)
}

/// Input for [`get_sheet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSheetInput {
    /// The sheet to read
    #[serde(alias = "sheetId")]
    pub sheet_id: String,
}

/// Response from [`get_sheet`]. Unknown sheet ids yield zero rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSheetResponse {
    /// One mapping per spreadsheet row, keyed by column header
    pub rows: Vec<Map<String, Value>>,
}

/// Read a spreadsheet's rows from Google Drive.
pub async fn get_sheet(
    gateway: &Gateway,
    input: GetSheetInput,
) -> GatewayResult<GetSheetResponse> {
    let params = ToolParams::from_serialize(&input)?;
    let response = gateway.invoke(KnownTool::GetSheet.name(), params).await?;
    Ok(serde_json::from_value(Value::Object(response))?)
}

//! Salesforce tool wrappers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolbridge_core::{GatewayResult, KnownTool, ToolParams};
use toolbridge_gateway::Gateway;

/// Input for [`query`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInput {
    /// Free-text query string (SOQL-shaped in the demos)
    pub query: String,
}

/// Response from [`query`]. Unmatched queries yield zero records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Matching records, keyed by field name
    pub records: Vec<Map<String, Value>>,
}

/// Run a query against Salesforce.
pub async fn query(gateway: &Gateway, input: QueryInput) -> GatewayResult<QueryResponse> {
    let params = ToolParams::from_serialize(&input)?;
    let response = gateway.invoke(KnownTool::Query.name(), params).await?;
    Ok(serde_json::from_value(Value::Object(response))?)
}

/// Input for [`update_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordInput {
    /// Object type to update (e.g. `Lead`)
    #[serde(alias = "objectType")]
    pub object_type: String,
    /// Identifier of the record to update
    #[serde(alias = "recordId")]
    pub record_id: String,
    /// Field data to write
    pub data: Map<String, Value>,
}

/// Acknowledgment from [`update_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordResponse {
    /// Whether the update was accepted
    pub success: bool,
    /// Echo of the updated record's id
    pub record_id: String,
}

/// Update a Salesforce record. Write-style: the call is appended to the
/// gateway's update ledger.
pub async fn update_record(
    gateway: &Gateway,
    input: UpdateRecordInput,
) -> GatewayResult<UpdateRecordResponse> {
    let params = ToolParams::from_serialize(&input)?;
    let response = gateway.invoke(KnownTool::UpdateRecord.name(), params).await?;
    Ok(serde_json::from_value(Value::Object(response))?)
}

//! Slack tool wrappers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolbridge_core::{GatewayResult, KnownTool, ToolParams};
use toolbridge_gateway::Gateway;

/// Input for [`get_channel_history`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetChannelHistoryInput {
    /// The channel to read
    pub channel: String,
}

/// Response from [`get_channel_history`]. Unknown channels yield zero
/// messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetChannelHistoryResponse {
    /// Messages, oldest first, each with `text` and `timestamp`
    pub messages: Vec<Map<String, Value>>,
}

/// Read a channel's message history from Slack.
pub async fn get_channel_history(
    gateway: &Gateway,
    input: GetChannelHistoryInput,
) -> GatewayResult<GetChannelHistoryResponse> {
    let params = ToolParams::from_serialize(&input)?;
    let response = gateway
        .invoke(KnownTool::GetChannelHistory.name(), params)
        .await?;
    Ok(serde_json::from_value(Value::Object(response))?)
}

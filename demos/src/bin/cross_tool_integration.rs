//! Cross-tool integration: read a meeting transcript from Google Drive and
//! attach it to a Salesforce record.
//!
//! The transcript flows directly between the two tools inside the
//! execution environment; only the short summary below would ever reach a
//! model's context.
//!
//! Run with: cargo run -p toolbridge-demos --bin cross_tool_integration

use serde_json::{Map, Value};
use tracing::info;

use toolbridge_core::BackingStore;
use toolbridge_gateway::Gateway;
use toolbridge_tools::{google_drive, salesforce};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = Gateway::new(BackingStore::with_fixtures());

    info!("Fetching meeting transcript from Google Drive...");
    let document = google_drive::get_document(
        &gateway,
        google_drive::GetDocumentInput {
            document_id: "abc123".into(),
        },
    )
    .await?;
    let transcript = document.content;

    info!(
        chars = transcript.len(),
        preview = &transcript[..transcript.len().min(80)],
        "Retrieved transcript"
    );

    info!("Updating Salesforce record...");
    let mut data = Map::new();
    data.insert("Notes".into(), Value::String(transcript));
    let ack = salesforce::update_record(
        &gateway,
        salesforce::UpdateRecordInput {
            object_type: "SalesMeeting".into(),
            record_id: "00Q5f000001abcXYZ".into(),
            data,
        },
    )
    .await?;

    info!(success = ack.success, record_id = %ack.record_id, "Update acknowledged");

    for update in gateway.ledger().list_all() {
        let notes_len = update
            .data
            .get("Notes")
            .and_then(Value::as_str)
            .map(str::len)
            .unwrap_or(0);
        info!(
            object_type = %update.object_type,
            record_id = %update.record_id,
            notes_chars = notes_len,
            "Recorded update"
        );
    }

    info!("The transcript never left the execution environment.");
    Ok(())
}

//! Data filtering: fetch a full spreadsheet, filter it locally, and report
//! only the summary.
//!
//! Run with: cargo run -p toolbridge-demos --bin data_filtering

use serde_json::Value;
use tracing::info;

use toolbridge_core::BackingStore;
use toolbridge_gateway::Gateway;
use toolbridge_tools::google_drive;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = Gateway::new(BackingStore::with_fixtures());

    info!("Fetching order data from Google Sheets...");
    let sheet = google_drive::get_sheet(
        &gateway,
        google_drive::GetSheetInput {
            sheet_id: "abc123".into(),
        },
    )
    .await?;
    info!(total = sheet.rows.len(), "Retrieved orders");

    let pending: Vec<_> = sheet
        .rows
        .iter()
        .filter(|row| row.get("Status").and_then(Value::as_str) == Some("pending"))
        .collect();
    info!(pending = pending.len(), "Filtered pending orders locally");

    for order in pending.iter().take(5) {
        info!(
            order_id = order.get("Order ID").and_then(serde_json::Value::as_str).unwrap_or("?"),
            amount = order.get("Amount").and_then(serde_json::Value::as_f64).unwrap_or(0.0),
            customer = order.get("Customer").and_then(serde_json::Value::as_str).unwrap_or("?"),
            "Pending order"
        );
    }

    let total_value: f64 = pending
        .iter()
        .filter_map(|order| order.get("Amount").and_then(Value::as_f64))
        .sum();
    info!(total_value, "Total pending order value");

    info!(
        "All {} rows were processed locally; only {} filtered results surfaced.",
        sheet.rows.len(),
        pending.len()
    );
    Ok(())
}

//! State persistence: export queried leads to a CSV file on disk, then
//! read them back, so a later execution can resume without re-querying.
//!
//! Run with: cargo run -p toolbridge-demos --bin state_persistence

use serde_json::Value;
use tracing::info;

use toolbridge_core::BackingStore;
use toolbridge_gateway::Gateway;
use toolbridge_tools::salesforce;

const FIELDS: [&str; 3] = ["Id", "Email", "Name"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = Gateway::new(BackingStore::with_fixtures());

    info!("Querying leads from Salesforce...");
    let result = salesforce::query(
        &gateway,
        salesforce::QueryInput {
            query: "SELECT Id, Email, Name FROM Lead LIMIT 1000".into(),
        },
    )
    .await?;
    info!(leads = result.records.len(), "Retrieved leads");

    std::fs::create_dir_all("workspace")?;
    let csv_path = "workspace/leads.csv";
    info!(path = csv_path, "Saving leads to CSV");

    let mut writer = csv::Writer::from_path(csv_path)?;
    writer.write_record(FIELDS)?;
    for lead in &result.records {
        let row: Vec<&str> = FIELDS
            .iter()
            .map(|field| lead.get(*field).and_then(Value::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!(saved = result.records.len(), "Leads written to disk");

    info!("Reading back from the saved file...");
    let mut reader = csv::Reader::from_path(csv_path)?;
    let saved: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    info!(loaded = saved.len(), "Leads loaded from disk");

    for lead in saved.iter().take(3) {
        info!(
            name = lead.get(2).unwrap_or(""),
            email = lead.get(1).unwrap_or(""),
            "Sample lead"
        );
    }

    info!("A future execution can pick up from the file without re-querying.");
    Ok(())
}

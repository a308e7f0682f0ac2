//! Reusable skills: call the pre-built `save_sheet_as_csv` skill and
//! preview its output.
//!
//! Run with: cargo run -p toolbridge-demos --bin reusable_skills

use tracing::info;

use toolbridge_core::BackingStore;
use toolbridge_gateway::Gateway;
use toolbridge_tools::skills;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = Gateway::new(BackingStore::with_fixtures());

    let sheet_id = "abc123";
    info!(sheet_id, "Using reusable skill: save_sheet_as_csv");

    let csv_path = skills::save_sheet_as_csv(&gateway, sheet_id, "workspace").await?;
    info!(path = %csv_path.display(), "Sheet saved");

    if csv_path.exists() {
        let metadata = std::fs::metadata(&csv_path)?;
        info!(bytes = metadata.len(), "File size");

        let contents = std::fs::read_to_string(&csv_path)?;
        for line in contents.lines().take(4) {
            info!(line, "File preview");
        }
    }

    info!("Skills are tested once and reused across workflows.");
    Ok(())
}

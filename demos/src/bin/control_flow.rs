//! Control flow: poll a Slack channel until a deployment-complete message
//! appears, all within one execution.
//!
//! Run with: cargo run -p toolbridge-demos --bin control_flow

use std::time::Duration;

use serde_json::Value;
use tracing::info;

use toolbridge_core::BackingStore;
use toolbridge_gateway::Gateway;
use toolbridge_tools::slack;

const MAX_ATTEMPTS: u32 = 5;
const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = Gateway::new(BackingStore::with_fixtures());

    info!("Waiting for deployment notification in Slack channel...");

    let mut found = false;
    let mut attempt = 0;
    while !found && attempt < MAX_ATTEMPTS {
        attempt += 1;
        info!(attempt, "Checking channel");

        let history = slack::get_channel_history(
            &gateway,
            slack::GetChannelHistoryInput {
                channel: "C123456".into(),
            },
        )
        .await?;

        found = history.messages.iter().any(|msg| {
            msg.get("text")
                .and_then(Value::as_str)
                .is_some_and(|text| text.contains("deployment complete"))
        });

        if found {
            info!("Deployment notification received");
            for msg in &history.messages {
                info!(
                    text = msg.get("text").and_then(serde_json::Value::as_str).unwrap_or(""),
                    "Channel message"
                );
            }
        } else {
            info!("No deployment notification yet, waiting...");
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    info!("The entire polling loop ran in a single execution.");
    Ok(())
}

//! The invocation gateway.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use toolbridge_core::{
    BackingStore, GatewayError, GatewayResult, KnownTool, ToolParams, ToolResponse, UpdateLedger,
};

use crate::handler::HandlerRegistry;
use crate::handlers::{
    GetChannelHistoryHandler, GetDocumentHandler, GetSheetHandler, QueryHandler,
    UpdateRecordHandler,
};

/// Simulated remote round-trip latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Single entry point for remote tool invocation.
///
/// Owns the handler registry and the update ledger; the backing store is
/// injected at construction so state lives with the gateway's session, not
/// in process globals.
pub struct Gateway {
    registry: HandlerRegistry,
    ledger: Arc<UpdateLedger>,
    latency: Duration,
}

impl Gateway {
    /// Create a gateway over the given backing store with the default
    /// simulated latency.
    pub fn new(store: BackingStore) -> Self {
        Self::with_latency(store, DEFAULT_LATENCY)
    }

    /// Create a gateway with explicit simulated latency.
    ///
    /// Tests use a near-zero duration to keep suites fast.
    pub fn with_latency(store: BackingStore, latency: Duration) -> Self {
        let store = Arc::new(store);
        let ledger = Arc::new(UpdateLedger::new());
        let registry = HandlerRegistry::new()
            .with_handler(Arc::new(GetDocumentHandler::new(Arc::clone(&store))))
            .with_handler(Arc::new(GetSheetHandler::new(Arc::clone(&store))))
            .with_handler(Arc::new(QueryHandler::new(Arc::clone(&store))))
            .with_handler(Arc::new(UpdateRecordHandler::new(Arc::clone(&ledger))))
            .with_handler(Arc::new(GetChannelHistoryHandler::new(Arc::clone(&store))));

        Self::from_parts(registry, ledger, latency)
            .expect("built-in registry covers every known tool")
    }

    /// Assemble a gateway from a custom registry and ledger handle.
    ///
    /// The registry must cover every [`KnownTool`]; a write-style handler
    /// in the registry should share the ledger passed here so callers can
    /// inspect its appends.
    pub fn from_parts(
        registry: HandlerRegistry,
        ledger: Arc<UpdateLedger>,
        latency: Duration,
    ) -> GatewayResult<Self> {
        registry.validate_complete()?;
        Ok(Self {
            registry,
            ledger,
            latency,
        })
    }

    /// The ledger of write-style calls made through this gateway.
    pub fn ledger(&self) -> &UpdateLedger {
        &self.ledger
    }

    /// Shared handle to the ledger, for handlers or long-lived inspectors.
    pub fn ledger_handle(&self) -> Arc<UpdateLedger> {
        Arc::clone(&self.ledger)
    }

    /// Invoke a tool by identifier with the given parameters.
    ///
    /// Suspends exactly once, at the simulated round trip. Unknown tool
    /// identifiers fail with [`GatewayError::UnsupportedTool`] before the
    /// suspension, so a failed call has no side effects. Read-style tools
    /// report misses in their response shape rather than as errors.
    pub async fn invoke(&self, tool: &str, mut params: ToolParams) -> GatewayResult<ToolResponse> {
        let Some(known) = KnownTool::from_name(tool) else {
            return Err(GatewayError::UnsupportedTool {
                tool: tool.to_string(),
            });
        };

        // Stand-in for the remote round trip. A production gateway awaits
        // the actual outbound call here.
        tokio::time::sleep(self.latency).await;

        let handler = self
            .registry
            .get(known)
            .ok_or(GatewayError::MissingHandler(known.name()))?;

        params.normalize(handler.aliases());
        debug!(tool = %known, params = params.len(), "dispatching tool call");
        handler.handle(&params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_gateway() -> Gateway {
        Gateway::with_latency(BackingStore::with_fixtures(), Duration::from_millis(1))
    }

    #[tokio::test]
    async fn unknown_tool_fails_without_side_effects() {
        let gateway = test_gateway();

        let err = gateway
            .invoke("jira__create_issue", ToolParams::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GatewayError::UnsupportedTool { ref tool } if tool == "jira__create_issue"
        ));
        assert!(gateway.ledger().is_empty());
    }

    #[tokio::test]
    async fn camel_case_aliases_are_normalized_before_dispatch() {
        let gateway = test_gateway();

        let snake = gateway
            .invoke(
                KnownTool::GetDocument.name(),
                ToolParams::new().with("document_id", json!("abc123")),
            )
            .await
            .unwrap();
        let camel = gateway
            .invoke(
                KnownTool::GetDocument.name(),
                ToolParams::new().with("documentId", json!("abc123")),
            )
            .await
            .unwrap();

        assert_eq!(snake, camel);
    }

    #[tokio::test]
    async fn repeated_reads_are_idempotent() {
        let gateway = test_gateway();
        let params = || ToolParams::new().with("sheet_id", json!("abc123"));

        let first = gateway
            .invoke(KnownTool::GetSheet.name(), params())
            .await
            .unwrap();
        let second = gateway
            .invoke(KnownTool::GetSheet.name(), params())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(gateway.ledger().is_empty());
    }
}

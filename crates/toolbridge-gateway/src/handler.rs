//! Handler trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use toolbridge_core::{GatewayError, GatewayResult, KnownTool, ToolParams, ToolResponse};

/// One tool's server-side behavior.
///
/// Handlers are synchronous; the gateway owns the single suspension point
/// (the simulated round trip), so a handler body never interleaves with
/// other invocations under cooperative scheduling.
pub trait ToolHandler: Send + Sync {
    /// Which tool this handler serves.
    fn tool(&self) -> KnownTool;

    /// Accepted parameter-name aliases, mapped to their canonical keys.
    ///
    /// Applied by the gateway before dispatch so handler bodies only ever
    /// see canonical snake_case keys.
    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Produce the tool's response for the given (normalized) parameters.
    fn handle(&self, params: &ToolParams) -> GatewayResult<ToolResponse>;
}

/// Registry mapping each supported tool to its handler.
///
/// Built once at gateway construction and validated complete before any
/// call is accepted, replacing dispatch-by-string-comparison with an O(1)
/// lookup and a startup exhaustiveness check.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<KnownTool, Arc<dyn ToolHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own tool, replacing any previous one.
    pub fn with_handler(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        self.handlers.insert(handler.tool(), handler);
        self
    }

    /// Look up the handler for a tool.
    pub fn get(&self, tool: KnownTool) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.get(&tool)
    }

    /// Verify that every known tool has a handler.
    pub fn validate_complete(&self) -> GatewayResult<()> {
        for tool in KnownTool::all() {
            if !self.handlers.contains_key(tool) {
                return Err(GatewayError::MissingHandler(tool.name()));
            }
        }
        Ok(())
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.keys().map(KnownTool::name).collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StubHandler(KnownTool);

    impl ToolHandler for StubHandler {
        fn tool(&self) -> KnownTool {
            self.0
        }

        fn handle(&self, _params: &ToolParams) -> GatewayResult<ToolResponse> {
            let mut response = ToolResponse::new();
            response.insert("ok".into(), json!(true));
            Ok(response)
        }
    }

    #[test]
    fn validate_complete_reports_the_missing_tool() {
        let mut registry = HandlerRegistry::new();
        for tool in KnownTool::all() {
            if *tool == KnownTool::Query {
                continue;
            }
            registry = registry.with_handler(Arc::new(StubHandler(*tool)));
        }

        match registry.validate_complete() {
            Err(GatewayError::MissingHandler(name)) => {
                assert_eq!(name, "salesforce__query");
            }
            other => panic!("expected MissingHandler, got {other:?}"),
        }
    }

    #[test]
    fn full_registry_validates() {
        let mut registry = HandlerRegistry::new();
        for tool in KnownTool::all() {
            registry = registry.with_handler(Arc::new(StubHandler(*tool)));
        }
        assert!(registry.validate_complete().is_ok());
        assert_eq!(registry.len(), KnownTool::all().len());
    }
}

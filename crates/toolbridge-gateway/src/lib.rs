//! # Toolbridge Gateway
//!
//! The single choke point through which all tool invocations pass.
//!
//! [`Gateway::invoke`] accepts a tool identifier and a parameter mapping,
//! simulates one remote round trip, and dispatches to a registered handler.
//! Unknown tools fail with [`toolbridge_core::GatewayError::UnsupportedTool`]
//! before any side effect. The mock handlers resolve against an injected
//! [`toolbridge_core::BackingStore`]; a production build would replace them
//! with real outbound calls while keeping the same contract: asynchronous,
//! exactly one suspension point per invocation, fail on unknown tools.

pub mod gateway;
pub mod handler;
pub mod handlers;

pub use gateway::{DEFAULT_LATENCY, Gateway};
pub use handler::{HandlerRegistry, ToolHandler};

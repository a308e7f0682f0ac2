//! # Toolbridge Core
//!
//! Core types shared by the toolbridge gateway and its typed tool wrappers:
//! tool identifiers, parameter and response mappings, the update ledger,
//! and the mock backing store that stands in for real remote services.

pub mod error;
pub mod ledger;
pub mod params;
pub mod store;
pub mod tool;

pub use error::{GatewayError, GatewayResult, InvalidToolId};
pub use ledger::{UpdateLedger, UpdateRecord};
pub use params::{ToolParams, ToolResponse};
pub use store::BackingStore;
pub use tool::{KnownTool, ToolId};

//! Error types for tool invocation.
//!
//! The gateway does not retry, catch, or log away failures; every error
//! here surfaces synchronously to the immediate caller.

use thiserror::Error;

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur while invoking a tool through the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The requested tool identifier is not in the supported set.
    ///
    /// This is fatal to the call and performs no side effects.
    #[error("unsupported tool: {tool}")]
    UnsupportedTool {
        /// The tool name that was requested
        tool: String,
    },

    /// A handler registry was constructed without covering every known tool.
    #[error("no handler registered for tool: {0}")]
    MissingHandler(&'static str),

    /// A payload failed to (de)serialize at the typed wrapper boundary.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Validation errors for [`crate::ToolId`] parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidToolId {
    /// The identifier string was empty.
    #[error("tool identifier is empty")]
    Empty,

    /// The identifier exceeded the maximum length.
    #[error("tool identifier is {len} characters long (max {max})", max = crate::tool::ToolId::MAX_LEN)]
    TooLong {
        /// Length of the rejected identifier
        len: usize,
    },

    /// The identifier contained a character outside `[A-Za-z0-9_]`.
    #[error("tool identifier contains invalid character {found:?}")]
    InvalidCharacter {
        /// The offending character
        found: char,
    },

    /// The identifier is missing the `__` separator between service and operation.
    #[error("tool identifier is missing the `__` service separator")]
    MissingSeparator,

    /// The service or operation segment was empty.
    #[error("tool identifier has an empty service or operation segment")]
    EmptySegment,
}

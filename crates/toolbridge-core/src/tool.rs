//! Tool identifiers.
//!
//! A tool is a named remote operation, addressed as `service__operation`.
//! [`ToolId`] is the validated opaque form; [`KnownTool`] enumerates the
//! tools this gateway actually supports and gives the registry an
//! exhaustiveness anchor.

use serde::{Deserialize, Serialize};

use crate::error::InvalidToolId;

/// Validated identifier for a remote tool, conventionally `service__operation`.
///
/// Used as an opaque lookup key; construction goes through [`ToolId::parse`]
/// so malformed identifiers are rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

impl ToolId {
    /// Maximum identifier length in bytes.
    pub const MAX_LEN: usize = 128;

    /// Parse and validate a tool identifier.
    ///
    /// Accepts `service__operation` where both segments are non-empty and
    /// the whole string is `[A-Za-z0-9_]`.
    pub fn parse(raw: &str) -> Result<Self, InvalidToolId> {
        if raw.is_empty() {
            return Err(InvalidToolId::Empty);
        }
        if raw.len() > Self::MAX_LEN {
            return Err(InvalidToolId::TooLong { len: raw.len() });
        }
        if let Some(found) = raw.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(InvalidToolId::InvalidCharacter { found });
        }
        match raw.split_once("__") {
            None => Err(InvalidToolId::MissingSeparator),
            Some((service, operation)) if service.is_empty() || operation.is_empty() => {
                Err(InvalidToolId::EmptySegment)
            }
            Some(_) => Ok(Self(raw.to_string())),
        }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The service segment (everything before the first `__`).
    pub fn service(&self) -> &str {
        self.0.split_once("__").map(|(s, _)| s).unwrap_or(&self.0)
    }

    /// The operation segment (everything after the first `__`).
    pub fn operation(&self) -> &str {
        self.0.split_once("__").map(|(_, o)| o).unwrap_or(&self.0)
    }
}

impl TryFrom<String> for ToolId {
    type Error = InvalidToolId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ToolId> for String {
    fn from(id: ToolId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ToolId {
    type Err = InvalidToolId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of tools this gateway supports.
///
/// Strongly-typed dispatch anchor: the handler registry is keyed by this
/// enum, which makes "every supported tool has a handler" checkable at
/// startup instead of relying on string comparisons at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownTool {
    /// `google_drive__get_document`
    GetDocument,
    /// `google_drive__get_sheet`
    GetSheet,
    /// `salesforce__query`
    Query,
    /// `salesforce__update_record`
    UpdateRecord,
    /// `slack__get_channel_history`
    GetChannelHistory,
}

impl KnownTool {
    /// Get the wire-level tool identifier string.
    pub fn name(&self) -> &'static str {
        match self {
            KnownTool::GetDocument => "google_drive__get_document",
            KnownTool::GetSheet => "google_drive__get_sheet",
            KnownTool::Query => "salesforce__query",
            KnownTool::UpdateRecord => "salesforce__update_record",
            KnownTool::GetChannelHistory => "slack__get_channel_history",
        }
    }

    /// Try to resolve a tool name string to a known tool.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "google_drive__get_document" => Some(KnownTool::GetDocument),
            "google_drive__get_sheet" => Some(KnownTool::GetSheet),
            "salesforce__query" => Some(KnownTool::Query),
            "salesforce__update_record" => Some(KnownTool::UpdateRecord),
            "slack__get_channel_history" => Some(KnownTool::GetChannelHistory),
            _ => None,
        }
    }

    /// All supported tools.
    pub fn all() -> &'static [KnownTool] {
        &[
            KnownTool::GetDocument,
            KnownTool::GetSheet,
            KnownTool::Query,
            KnownTool::UpdateRecord,
            KnownTool::GetChannelHistory,
        ]
    }
}

impl From<KnownTool> for ToolId {
    fn from(tool: KnownTool) -> Self {
        // Known tool names are valid by construction.
        ToolId(tool.name().to_string())
    }
}

impl std::fmt::Display for KnownTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_id_accepts_service_operation_shape() {
        let id = ToolId::parse("google_drive__get_document").unwrap();
        assert_eq!(id.service(), "google_drive");
        assert_eq!(id.operation(), "get_document");
        assert_eq!(id.as_str(), "google_drive__get_document");
    }

    #[test]
    fn tool_id_rejects_malformed_input() {
        assert_eq!(ToolId::parse(""), Err(InvalidToolId::Empty));
        assert_eq!(ToolId::parse("no_separator"), Err(InvalidToolId::MissingSeparator));
        assert_eq!(ToolId::parse("__get_document"), Err(InvalidToolId::EmptySegment));
        assert_eq!(ToolId::parse("drive__"), Err(InvalidToolId::EmptySegment));
        assert_eq!(
            ToolId::parse("drive__get doc"),
            Err(InvalidToolId::InvalidCharacter { found: ' ' })
        );
        assert!(matches!(
            ToolId::parse(&"a".repeat(200)),
            Err(InvalidToolId::TooLong { len: 200 })
        ));
    }

    #[test]
    fn tool_id_round_trips_through_serde() {
        let id = ToolId::parse("slack__get_channel_history").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"slack__get_channel_history\"");

        let back: ToolId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let bad: Result<ToolId, _> = serde_json::from_str("\"not a tool\"");
        assert!(bad.is_err());
    }

    #[test]
    fn known_tool_names_round_trip() {
        for tool in KnownTool::all() {
            assert_eq!(KnownTool::from_name(tool.name()), Some(*tool));
            // Every supported name is itself a valid ToolId.
            let id = ToolId::from(*tool);
            assert_eq!(id.as_str(), tool.name());
        }
        assert_eq!(KnownTool::from_name("jira__create_issue"), None);
    }
}

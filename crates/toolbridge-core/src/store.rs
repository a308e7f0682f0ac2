//! Mock backing store.
//!
//! Stands in for the remote services behind the gateway. Read-only after
//! construction; the only mutable piece of shared state in the system is
//! the update ledger. A production gateway replaces this with actual
//! outbound calls while keeping the same invoke contract.

use std::collections::HashMap;

use serde_json::{Map, Value, json};

type Rows = Vec<Map<String, Value>>;

/// Canned responses keyed per service, seeded at construction.
#[derive(Debug, Default)]
pub struct BackingStore {
    documents: HashMap<String, String>,
    sheets: HashMap<String, Rows>,
    record_sets: HashMap<String, Rows>,
    channels: HashMap<String, Rows>,
}

impl BackingStore {
    /// Create a store with no data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demonstration fixtures.
    pub fn with_fixtures() -> Self {
        Self::empty()
            .with_document("abc123", TRANSCRIPT)
            .with_sheet(
                "abc123",
                json!([
                    { "Order ID": "1001", "Status": "pending", "Amount": 150.00, "Customer": "Acme Corp" },
                    { "Order ID": "1002", "Status": "completed", "Amount": 200.00, "Customer": "TechCo" },
                    { "Order ID": "1003", "Status": "pending", "Amount": 175.50, "Customer": "StartupXYZ" },
                    { "Order ID": "1004", "Status": "pending", "Amount": 300.00, "Customer": "BigCorp" },
                    { "Order ID": "1005", "Status": "shipped", "Amount": 125.00, "Customer": "SmallBiz" },
                ]),
            )
            .with_sheet(
                "sales-2024",
                json!([
                    { "Region": "North", "Sales": 45000, "Quarter": "Q1" },
                    { "Region": "South", "Sales": 38000, "Quarter": "Q1" },
                    { "Region": "North", "Sales": 52000, "Quarter": "Q2" },
                    { "Region": "South", "Sales": 41000, "Quarter": "Q2" },
                    { "Region": "North", "Sales": 48000, "Quarter": "Q3" },
                    { "Region": "South", "Sales": 44000, "Quarter": "Q3" },
                ]),
            )
            .with_record_set(
                "leads",
                json!([
                    { "Id": "L001", "Email": "contact1@example.com", "Name": "John Doe" },
                    { "Id": "L002", "Email": "contact2@example.com", "Name": "Jane Smith" },
                    { "Id": "L003", "Email": "contact3@example.com", "Name": "Bob Johnson" },
                ]),
            )
            .with_channel(
                "C123456",
                json!([
                    { "text": "Starting deployment...", "timestamp": "1699000000" },
                    { "text": "Running tests...", "timestamp": "1699000060" },
                    { "text": "Tests passed!", "timestamp": "1699000120" },
                    { "text": "deployment complete", "timestamp": "1699000180" },
                ]),
            )
    }

    /// Add a document fixture.
    pub fn with_document(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.insert(id.into(), content.into());
        self
    }

    /// Add a sheet fixture from a JSON array of row objects.
    ///
    /// Non-object entries are dropped.
    pub fn with_sheet(mut self, id: impl Into<String>, rows: Value) -> Self {
        self.sheets.insert(id.into(), object_rows(rows));
        self
    }

    /// Add a named query result set from a JSON array of record objects.
    pub fn with_record_set(mut self, name: impl Into<String>, records: Value) -> Self {
        self.record_sets.insert(name.into(), object_rows(records));
        self
    }

    /// Add a channel history fixture from a JSON array of message objects.
    pub fn with_channel(mut self, channel: impl Into<String>, messages: Value) -> Self {
        self.channels.insert(channel.into(), object_rows(messages));
        self
    }

    /// Look up a document by id.
    pub fn document(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    /// Look up a sheet's rows by id.
    pub fn sheet(&self, id: &str) -> Option<&[Map<String, Value>]> {
        self.sheets.get(id).map(Vec::as_slice)
    }

    /// Look up a named query result set.
    pub fn record_set(&self, name: &str) -> Option<&[Map<String, Value>]> {
        self.record_sets.get(name).map(Vec::as_slice)
    }

    /// Look up a channel's message history.
    pub fn channel(&self, channel: &str) -> Option<&[Map<String, Value>]> {
        self.channels.get(channel).map(Vec::as_slice)
    }
}

fn object_rows(value: Value) -> Rows {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

const TRANSCRIPT: &str = "\
Meeting Transcript - Q4 Planning Session

Attendees: Alice, Bob, Carol
Date: November 1, 2025

Alice: Let's review our Q4 objectives. We need to focus on three key areas...
Bob: I agree. The customer feedback has been clear about what they want...
Carol: We should also consider the resource allocation for these initiatives...

[... 24,000 more tokens of transcript ...]

Action Items:
1. Alice to prepare budget proposal
2. Bob to gather customer requirements
3. Carol to draft resource plan
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_seed_the_documented_data_set() {
        let store = BackingStore::with_fixtures();

        let transcript = store.document("abc123").unwrap();
        assert!(transcript.contains("Meeting Transcript - Q4 Planning Session"));

        assert_eq!(store.sheet("abc123").unwrap().len(), 5);
        assert_eq!(store.sheet("sales-2024").unwrap().len(), 6);
        assert_eq!(store.record_set("leads").unwrap().len(), 3);
        assert_eq!(store.channel("C123456").unwrap().len(), 4);

        assert!(store.document("missing").is_none());
        assert!(store.sheet("missing").is_none());
    }

    #[test]
    fn sheet_rows_preserve_fixture_key_order() {
        let store = BackingStore::with_fixtures();
        let first = &store.sheet("abc123").unwrap()[0];
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Order ID", "Status", "Amount", "Customer"]);
    }

    #[test]
    fn non_object_rows_are_dropped() {
        let store = BackingStore::empty().with_sheet("s1", json!([{ "a": 1 }, "stray", 7]));
        assert_eq!(store.sheet("s1").unwrap().len(), 1);
    }
}

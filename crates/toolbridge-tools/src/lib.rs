//! # Toolbridge Tools
//!
//! Typed wrappers over the gateway, one module per remote service. Each
//! wrapper is a thin façade with a fixed tool identifier: it serializes
//! its typed input to a parameter mapping, invokes the gateway, and
//! deserializes the response. No transformation, no extra error handling;
//! gateway failures pass through unchanged.
//!
//! The `skills` module layers reusable helpers (such as CSV export) on top
//! of the wrappers.

pub mod google_drive;
pub mod salesforce;
pub mod skills;
pub mod slack;

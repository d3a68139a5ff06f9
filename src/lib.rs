//! # bru-json
//!
//! Canonical JSON document model for BRU request and environment files.
//!
//! BRU is a plaintext format describing HTTP and GraphQL requests. An
//! external parser turns raw BRU text into a loosely-shaped JSON tree; this
//! crate reshapes that tree into a canonical, fully-defaulted document that
//! request-execution and rendering tooling can consume without probing for
//! absent fields. It also extracts enabled-only variable maps from parsed
//! environments and provides the explicit escape-strategy machinery that
//! template substitution is governed by.
//!
//! ## Overview
//!
//! The crate owns three transforms, all synchronous, side-effect-free and
//! safe to call concurrently:
//!
//! - [`normalize_request`]: parsed request tree to [`RequestDocument`]
//! - [`normalize_environment`]: parsed environment tree to [`EnvironmentDocument`]
//! - [`extract_variables`]: environment document to an enabled-only variable map
//!
//! Parsing the source text is out of scope: malformed BRU never reaches this
//! crate. Normalization is all-or-nothing; a tree that cannot be reshaped
//! yields an error value, never a partial document and never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use bru_json::{extract_variables, normalize_environment, normalize_request};
//! use serde_json::json;
//!
//! fn main() -> bru_json::Result<()> {
//!     // Tree shape as produced by the external BRU parser
//!     let tree = json!({
//!         "meta": { "type": "http", "name": "List users", "seq": "2" },
//!         "http": { "method": "get", "url": "https://{{host}}/users" }
//!     });
//!
//!     let doc = normalize_request(&tree)?;
//!     assert_eq!(doc.kind.as_str(), "http-request");
//!     assert_eq!(doc.seq, 2);
//!     assert_eq!(doc.request.method, "GET");
//!     assert_eq!(doc.request.body.mode, "none");
//!
//!     let environment = normalize_environment(&json!({
//!         "variables": [
//!             { "name": "host", "value": "api.example.com", "enabled": true }
//!         ]
//!     }))?;
//!     let vars = extract_variables(&environment);
//!     assert_eq!(vars["host"], "api.example.com");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Canonical request and environment document model |
//! | [`normalize`] | Parsed-tree to canonical-document transforms |
//! | [`vars`] | Enabled-only variable extraction |
//! | [`template`] | Escape strategies and `{{name}}` rendering |
//! | [`error`] | Unified crate error type |

pub mod document;
pub mod normalize;
pub mod template;
pub mod vars;

// Re-export main types for convenience
pub use document::{
    EnvVariable, EnvironmentDocument, RequestBody, RequestConfig, RequestDocument, RequestKind,
};
pub use normalize::{normalize_environment, normalize_request, NormalizeError};
pub use template::{EscapeStrategy, Renderer};
pub use vars::{extract_variables, extract_variables_with};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;

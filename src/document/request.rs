//! Canonical request document structure
//!
//! This module contains the canonical request document that downstream
//! execution and rendering tooling consumes. The serialized field order is
//! part of the contract and must stay stable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request classification tag
///
/// Always one of the three enumerated constants; unrecognized or missing
/// source tags collapse to [`RequestKind::Http`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestKind {
    /// Plain HTTP request file
    #[serde(rename = "http-request")]
    HttpRequest,

    /// GraphQL request file
    #[serde(rename = "graphql-request")]
    GraphqlRequest,

    /// Generic fallback classification
    #[default]
    #[serde(rename = "http")]
    Http,
}

impl RequestKind {
    /// Get the string representation used in the canonical document.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::HttpRequest => "http-request",
            RequestKind::GraphqlRequest => "graphql-request",
            RequestKind::Http => "http",
        }
    }

    /// Classify a source-level type tag.
    ///
    /// `"http"` and `"graphql"` map to their canonical request kinds; any
    /// other tag, including an absent one, falls back to [`RequestKind::Http`].
    /// The classification is lossy: the original tag is not retained.
    pub fn classify(tag: Option<&str>) -> Self {
        match tag {
            Some("http") => RequestKind::HttpRequest,
            Some("graphql") => RequestKind::GraphqlRequest,
            _ => RequestKind::Http,
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http-request" => Ok(RequestKind::HttpRequest),
            "graphql-request" => Ok(RequestKind::GraphqlRequest),
            "http" => Ok(RequestKind::Http),
            _ => Err(format!("Unknown request kind: {}", s)),
        }
    }
}

/// Canonical request document
///
/// Produced by [`normalize_request`](crate::normalize_request). Collection
/// fields are never absent (they default to empty sequences) and scalar text
/// fields default to empty strings, so consumers never probe for presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDocument {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub name: String,
    pub seq: i64,
    pub request: RequestConfig,
}

/// Request details of a canonical document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// HTTP method, always upper-cased
    pub method: String,
    pub url: String,
    /// Query parameter records, structurally owned by the parser
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default)]
    pub headers: Vec<Value>,
    pub body: RequestBody,
    #[serde(default)]
    pub vars: Vec<Value>,
    #[serde(default)]
    pub assert: Vec<Value>,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub tests: String,
}

/// Request body with a required `mode` discriminator
///
/// All body payload fields coming from the parser (`json`, `text`,
/// `graphql`, form sections, ...) are preserved verbatim next to `mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub mode: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self {
            mode: "none".to_string(),
            fields: Map::new(),
        }
    }
}

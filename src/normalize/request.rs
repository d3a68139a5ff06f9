//! Request tree normalization
//!
//! Reshapes the external parser's request tree into a [`RequestDocument`].
//! The parser emits a loosely-shaped tree in which any field may be absent;
//! this module views it through explicitly optional structs and applies a
//! documented default at every extraction site.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::document::request::{RequestBody, RequestConfig, RequestDocument, RequestKind};

use super::error::NormalizeError;

/// Sequence number assigned when the source carries none
pub const DEFAULT_SEQ: i64 = 1;

/// Body mode assigned when the source carries none
pub const DEFAULT_BODY_MODE: &str = "none";

/// Optional-field view of a parsed request tree
///
/// Mirrors the parser's output shape one level deep. Collection records and
/// body payload fields stay opaque `Value`s; their internals belong to the
/// parser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParsedRequest {
    pub meta: Option<ParsedMeta>,
    pub http: Option<ParsedHttp>,
    pub query: Option<Vec<Value>>,
    pub headers: Option<Vec<Value>>,
    pub body: Option<Map<String, Value>>,
    pub vars: Option<Vec<Value>>,
    pub assert: Option<Vec<Value>>,
    pub script: Option<String>,
    pub tests: Option<String>,
}

/// Optional-field view of the `meta` block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParsedMeta {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub seq: Option<SeqValue>,
}

/// Optional-field view of the `http` block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParsedHttp {
    pub method: Option<String>,
    pub url: Option<String>,
    /// Body mode tag ("json", "text", "graphql", ...)
    pub body: Option<String>,
}

/// A `meta.seq` value, which the parser may emit as a number or a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeqValue {
    Number(serde_json::Number),
    Text(String),
}

impl SeqValue {
    /// Numeric interpretation; fractional values truncate toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SeqValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            SeqValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64)),
        }
    }
}

/// Normalize a parsed request tree into a canonical request document.
///
/// Field policy:
/// - `meta.type`: `"http"` becomes `http-request`, `"graphql"` becomes
///   `graphql-request`, anything else falls back to `http`
/// - `meta.seq`: numeric parse of a number or string, absent or non-numeric
///   resolves to `1`
/// - `http.method`: upper-cased unconditionally, absent yields `""`
/// - `query`/`headers`/`vars`/`assert`: copied through, absent yields empty
/// - `body`: copied through (absent yields an empty object), then `mode`
///   assigned in place from `http.body` (absent yields `"none"`), keeping
///   already-populated payload fields
/// - `script`/`tests`: absent yields `""`
///
/// A tree whose structure cannot be reshaped (non-object root, field of an
/// impossible type) fails with [`NormalizeError::RequestShape`]; no partial
/// document is produced.
pub fn normalize_request(tree: &Value) -> Result<RequestDocument, NormalizeError> {
    let parsed = ParsedRequest::deserialize(tree).map_err(NormalizeError::request_shape)?;

    let meta = parsed.meta.unwrap_or_default();
    let http = parsed.http.unwrap_or_default();

    let kind = RequestKind::classify(meta.kind.as_deref());
    let seq = meta
        .seq
        .as_ref()
        .and_then(SeqValue::as_i64)
        .unwrap_or(DEFAULT_SEQ);

    let mut fields = parsed.body.unwrap_or_default();
    // The canonical mode always wins over a parser-provided one.
    fields.remove("mode");
    let body = RequestBody {
        mode: http
            .body
            .unwrap_or_else(|| DEFAULT_BODY_MODE.to_string()),
        fields,
    };

    let document = RequestDocument {
        kind,
        name: meta.name.unwrap_or_default(),
        seq,
        request: RequestConfig {
            method: http.method.unwrap_or_default().to_uppercase(),
            url: http.url.unwrap_or_default(),
            params: parsed.query.unwrap_or_default(),
            headers: parsed.headers.unwrap_or_default(),
            body,
            vars: parsed.vars.unwrap_or_default(),
            assert: parsed.assert.unwrap_or_default(),
            script: parsed.script.unwrap_or_default(),
            tests: parsed.tests.unwrap_or_default(),
        },
    };

    debug!(kind = %document.kind, seq = document.seq, "normalized request tree");
    Ok(document)
}

//! Raw comment records as produced by the comment parser.
//!
//! The parser emits one JSON object per documentation comment. Every field is
//! optional on the wire; anything missing or `null` decodes to an empty
//! default so the builder never has to deal with malformed input.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One parsed documentation comment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawComment {
    #[serde(deserialize_with = "null_as_default")]
    pub description: Description,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<RawTag>,
    pub ctx: Option<Context>,
    pub filename: Option<String>,
    #[serde(deserialize_with = "lenient_line")]
    pub line: Option<u32>,
    pub code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ignore: bool,
    #[serde(rename = "isPrivate", deserialize_with = "null_as_default")]
    pub is_private: bool,
}

/// Free-text description of a comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Description {
    #[serde(deserialize_with = "null_as_default")]
    pub full: String,
    #[serde(alias = "short", deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

/// A single `@tag` from a comment.
///
/// `kind` holds the raw tag type (`param`, `return`, `see`, `module`, ...).
/// Structured tags fill `name`/`types`/`description` (params, returns) or
/// `local`/`url`/`title` (see); free-form tags carry their text in `content`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawTag {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(alias = "string", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RawTag {
    /// Tag with a type and free-form content.
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Content text, empty when the tag has none.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// The syntactic construct a comment annotates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Context {
    /// Construct type, e.g. `function`, `method`, `property`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display signature, e.g. `Client.prototype.request()`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// `null` reads as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Line numbers arrive as numbers or numeric strings; anything else is dropped.
fn lenient_line<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let line = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(line)
}

/// Decode a JSON array of comment records.
pub fn parse_comments(json: &str) -> serde_json::Result<Vec<RawComment>> {
    serde_json::from_str(json)
}

/// Decode a single comment record.
pub fn parse_comment(json: &str) -> serde_json::Result<RawComment> {
    serde_json::from_str(json)
}

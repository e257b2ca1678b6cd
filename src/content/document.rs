//! Stored body decoding.
//!
//! A record body is either HTML (everything written by the current editor)
//! or a JSON document in the older block format. The shape is decided once
//! here; rendering never re-inspects the raw value.

use std::borrow::Cow;

use serde_json::Value;

use super::block::Block;
use crate::utils::html::escape;

/// Decoded record body.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentDocument {
    /// HTML, used verbatim.
    PlainHtml(String),
    /// Legacy block list, rendered block by block.
    BlockList(Vec<Block>),
}

impl ContentDocument {
    /// Decode a stored string.
    ///
    /// Only strings that look like JSON (`{` or `[` after trimming) are
    /// parsed; a failed parse means the string was HTML after all.
    pub fn decode_str(raw: &str) -> Self {
        if looks_like_json(raw)
            && let Ok(value) = serde_json::from_str::<Value>(raw)
        {
            return Self::decode(value);
        }
        Self::PlainHtml(raw.to_string())
    }

    /// Decode an already-parsed value.
    pub fn decode(value: Value) -> Self {
        match value {
            Value::Null => Self::PlainHtml(String::new()),
            Value::String(s) => Self::decode_str(&s),
            Value::Array(items) => Self::BlockList(items.iter().map(Block::from_value).collect()),
            Value::Object(map) => {
                if let Some(Value::String(html)) = map.get("html") {
                    return Self::PlainHtml(html.clone());
                }
                match map.get("content") {
                    Some(Value::String(content)) => return Self::PlainHtml(content.clone()),
                    Some(nested @ (Value::Object(_) | Value::Array(_))) => {
                        return Self::decode(nested.clone());
                    }
                    _ => {}
                }
                if let Some(Value::Array(blocks)) = map.get("blocks") {
                    return Self::BlockList(blocks.iter().map(Block::from_value).collect());
                }
                Self::PlainHtml(dump(&Value::Object(map)))
            }
            other => Self::PlainHtml(dump(&other)),
        }
    }

    /// Render to HTML.
    pub fn to_html(&self) -> Cow<'_, str> {
        match self {
            Self::PlainHtml(html) => Cow::Borrowed(html),
            Self::BlockList(blocks) => Cow::Owned(blocks.iter().map(Block::to_html).collect()),
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Self::PlainHtml(html) => html,
            blocks @ Self::BlockList(_) => blocks.to_html().into_owned(),
        }
    }

    pub const fn is_blocks(&self) -> bool {
        matches!(self, Self::BlockList(_))
    }
}

/// Normalize a stored body of any JSON shape to HTML.
pub fn normalize(raw: &Value) -> String {
    ContentDocument::decode(raw.clone()).into_html()
}

/// Normalize a stored string body. HTML comes back borrowed and unchanged.
pub fn normalize_str(raw: &str) -> Cow<'_, str> {
    if !looks_like_json(raw) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(ContentDocument::decode_str(raw).into_html())
}

#[inline]
fn looks_like_json(raw: &str) -> bool {
    raw.trim_start().starts_with(['{', '['])
}

/// Last resort for unrecognized documents: pretty JSON in a `<pre>`.
fn dump(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
    format!("<pre>{}</pre>", escape(&pretty))
}

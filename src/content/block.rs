//! Legacy block-format content.
//!
//! Before bodies were stored as HTML, the editor saved a list of blocks:
//!
//! ```json
//! {"blocks": [
//!   {"kind": "heading",   "payload": {"text": "Intro", "level": 2}},
//!   {"type": "paragraph", "data":    {"text": "Hello <b>world</b>"}},
//!   {"type": "list",      "data":    {"style": "ordered", "items": ["a", "b"]}}
//! ]}
//! ```
//!
//! Both `{kind, payload}` and the editor's own `{type, data}` spellings are
//! accepted. Inline text fields carry the editor's inline markup and are
//! emitted as written; code and attribute values are escaped.

use serde_json::{Map, Value};

use crate::utils::html::{escape, escape_attr};

/// A decoded content block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<ListItem> },
    Image { url: String, caption: Option<String>, alt: String },
    Code { code: String, language: Option<String> },
    Quote { text: String, caption: Option<String> },
    /// Unrecognized block, kept verbatim for the JSON dump.
    Unknown(Value),
}

/// List entry with optional nested entries (same list style).
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: String,
    pub children: Vec<ListItem>,
}

impl Block {
    /// Decode one block. Never fails: anything unrecognized is `Unknown`.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Unknown(value.clone());
        };

        let kind = obj
            .get("kind")
            .or_else(|| obj.get("type"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        let empty = Map::new();
        let payload = obj
            .get("payload")
            .or_else(|| obj.get("data"))
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        match kind.to_ascii_lowercase().as_str() {
            "heading" | "header" => Self::Heading {
                level: heading_level(payload.get("level")),
                text: text_field(payload, "text"),
            },
            "paragraph" => Self::Paragraph {
                text: text_field(payload, "text"),
            },
            "list" => Self::List {
                ordered: payload.get("style").and_then(Value::as_str) == Some("ordered"),
                items: list_items(payload.get("items")),
            },
            "image" => {
                let url = payload
                    .get("url")
                    .and_then(Value::as_str)
                    .or_else(|| payload.get("file").and_then(|f| f.get("url")).and_then(Value::as_str))
                    .unwrap_or_default()
                    .to_string();
                let caption = optional_text(payload, "caption");
                let alt = optional_text(payload, "alt")
                    .or_else(|| caption.clone())
                    .unwrap_or_default();
                Self::Image { url, caption, alt }
            }
            "code" => Self::Code {
                code: text_field(payload, "code"),
                language: optional_text(payload, "language"),
            },
            "quote" => Self::Quote {
                text: text_field(payload, "text"),
                caption: optional_text(payload, "caption"),
            },
            _ => Self::Unknown(value.clone()),
        }
    }

    /// Render this block as an HTML fragment.
    pub fn to_html(&self) -> String {
        match self {
            Self::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Self::Paragraph { text } => format!("<p>{text}</p>"),
            Self::List { ordered, items } => render_list(*ordered, items),
            Self::Image { url, caption, alt } => {
                if url.is_empty() {
                    return String::new();
                }
                let caption = caption
                    .as_deref()
                    .map(|c| format!("<figcaption>{c}</figcaption>"))
                    .unwrap_or_default();
                format!(
                    "<figure><img src=\"{}\" alt=\"{}\" loading=\"lazy\"/>{caption}</figure>",
                    escape_attr(url),
                    escape_attr(alt),
                )
            }
            Self::Code { code, language } => {
                let class = language
                    .as_deref()
                    .map(|l| format!(" class=\"language-{}\"", escape_attr(l)))
                    .unwrap_or_default();
                format!("<pre><code{class}>{}</code></pre>", escape(code))
            }
            Self::Quote { text, caption } => {
                let cite = caption
                    .as_deref()
                    .map(|c| format!("<cite>{c}</cite>"))
                    .unwrap_or_default();
                format!("<blockquote><p>{text}</p>{cite}</blockquote>")
            }
            Self::Unknown(raw) => {
                let dump = serde_json::to_string(raw).unwrap_or_default();
                format!("<div>{}</div>", escape(&dump))
            }
        }
    }
}

fn render_list(ordered: bool, items: &[ListItem]) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let mut html = format!("<{tag}>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&item.content);
        if !item.children.is_empty() {
            html.push_str(&render_list(ordered, &item.children));
        }
        html.push_str("</li>");
    }
    html.push_str(&format!("</{tag}>"));
    html
}

/// Items are plain strings, or `{content, items}` objects for nested lists.
fn list_items(value: Option<&Value>) -> Vec<ListItem> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(ListItem {
                content: s.clone(),
                children: Vec::new(),
            }),
            Value::Object(obj) => Some(ListItem {
                content: obj
                    .get("content")
                    .or_else(|| obj.get("text"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                children: list_items(obj.get("items")),
            }),
            _ => None,
        })
        .collect()
}

/// Heading level as number or numeric string, clamped to 1..=6 (default 2).
fn heading_level(value: Option<&Value>) -> u8 {
    let level = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    level.map_or(2, |l| l.clamp(1, 6) as u8)
}

fn text_field(payload: &Map<String, Value>, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_text(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

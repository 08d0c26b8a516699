//! Stored note content.
//!
//! Notes were first saved as a single markdown string and later as an ordered
//! list of typed blocks. Both shapes still live in the `notes.content` column,
//! so [`NoteContent`] carries them as distinct variants and every consumer has
//! to handle both.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// One unit of note content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        #[serde(default, deserialize_with = "null_as_empty")]
        content: String,
    },
    Code {
        #[serde(default, deserialize_with = "null_as_empty")]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    /// Any block type this build does not know about. Normalizes to nothing.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        ContentBlock::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>, language: Option<&str>) -> Self {
        ContentBlock::Code {
            content: content.into(),
            language: language.map(str::to_string),
        }
    }
}

impl ContentBlock {
    /// Parses a single stored block. Anything that is not a well-formed block
    /// becomes [`ContentBlock::Unknown`].
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(block) => block,
            Err(e) => {
                debug!("Skipping malformed content block: {e}");
                ContentBlock::Unknown
            }
        }
    }
}

/// A note's content in either of its two stored shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NoteContent {
    /// Legacy shape: the whole note is one markdown string.
    Markdown(String),
    /// Current shape: ordered blocks of prose and code.
    Blocks(Vec<ContentBlock>),
}

impl Default for NoteContent {
    fn default() -> Self {
        NoteContent::Markdown(String::new())
    }
}

impl NoteContent {
    /// Converts a raw `notes.content` value. Total over all JSON:
    /// strings are markdown, arrays are blocks, anything else is empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(markdown) => NoteContent::Markdown(markdown),
            Value::Array(items) => {
                NoteContent::Blocks(items.into_iter().map(ContentBlock::from_value).collect())
            }
            Value::Null => NoteContent::default(),
            other => {
                debug!("Unexpected note content shape: {other}");
                NoteContent::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for NoteContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(NoteContent::from_value)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

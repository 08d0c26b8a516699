//! Presentation style table for rendered notes.
//!
//! Every class the renderer emits comes from this module. Adding a language
//! accent or restyling a heading level is a table edit, not a renderer change.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Block and inline classes
// ────────────────────────────────────────────────────────────────────────────

/// Heading classes by level. Levels not listed render unstyled.
const HEADING_CLASSES: &[(u8, &str)] = &[
    (2, "text-2xl font-bold mt-8 mb-4"),
    (3, "text-xl font-bold mt-6 mb-3"),
];

pub const PARAGRAPH_CLASS: &str = "mb-4";
pub const UNORDERED_LIST_CLASS: &str = "list-disc pl-6 mb-4";
pub const ORDERED_LIST_CLASS: &str = "list-decimal pl-6 mb-4";
pub const LIST_ITEM_CLASS: &str = "mb-2";
pub const LINK_CLASS: &str = "text-blue-500 hover:text-blue-600 transition-colors";
pub const INLINE_CODE_CLASS: &str =
    "px-1 py-0.5 rounded bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 text-sm";
/// Full-width scrollable container around fenced code.
pub const CODE_CONTAINER_CLASS: &str = "p-4 rounded-md overflow-x-auto";

pub fn heading_class(level: u8) -> Option<&'static str> {
    HEADING_CLASSES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, class)| *class)
}

pub fn list_class(ordered: bool) -> &'static str {
    if ordered {
        ORDERED_LIST_CLASS
    } else {
        UNORDERED_LIST_CLASS
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

/// Color scheme of the page the tree is rendered into. Only code containers
/// depend on it; inline elements carry `dark:` variants instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code_container_colors(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100 text-gray-800",
            Theme::Dark => "bg-gray-800 text-gray-100",
        }
    }

    /// Complete class list for a code block container.
    pub fn code_container_class(self) -> String {
        format!("{CODE_CONTAINER_CLASS} {}", self.code_container_colors())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language accents
// ────────────────────────────────────────────────────────────────────────────

/// Accent hue applied to the text of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// JavaScript family.
    Yellow,
    /// TypeScript family.
    Blue,
    /// Python.
    Green,
    /// Markup.
    Red,
    /// Stylesheets.
    Pink,
    /// Untagged or unrecognized languages.
    Neutral,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Yellow => "text-yellow-400",
            Accent::Blue => "text-blue-400",
            Accent::Green => "text-green-400",
            Accent::Red => "text-red-400",
            Accent::Pink => "text-pink-400",
            Accent::Neutral => "text-gray-400",
        }
    }
}

/// Language tag (lowercase) to accent. Anything missing falls back to
/// [`Accent::Neutral`].
const LANGUAGE_ACCENTS: &[(&str, Accent)] = &[
    ("javascript", Accent::Yellow),
    ("js", Accent::Yellow),
    ("jsx", Accent::Yellow),
    ("typescript", Accent::Blue),
    ("ts", Accent::Blue),
    ("tsx", Accent::Blue),
    ("python", Accent::Green),
    ("py", Accent::Green),
    ("html", Accent::Red),
    ("xml", Accent::Red),
    ("css", Accent::Pink),
    ("scss", Accent::Pink),
];

pub fn accent_for(language: Option<&str>) -> Accent {
    let Some(language) = language else {
        return Accent::Neutral;
    };
    let language = language.to_ascii_lowercase();
    LANGUAGE_ACCENTS
        .iter()
        .find(|(tag, _)| *tag == language)
        .map(|(_, accent)| *accent)
        .unwrap_or(Accent::Neutral)
}

/// Extracts the language tag from a fence info string: the leading run of
/// ASCII word characters. `"rust,ignore"` gives `rust`, `"{.py}"` gives none.
pub fn language_tag(info: &str) -> Option<&str> {
    let info = info.trim_start();
    let end = info
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(info.len());
    (end > 0).then(|| &info[..end])
}

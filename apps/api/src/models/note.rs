use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// A note as stored, before its content is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Value,
    pub technology: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A note joined with its category, as returned by `find_note`.
#[derive(Debug, Clone, FromRow)]
pub struct NoteWithCategoryRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Value,
    pub technology: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
    pub category_slug: String,
}

/// Card entry in a category listing.
#[derive(Debug, Clone, Serialize)]
pub struct NoteSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub technology: Option<String>,
    pub excerpt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    /// Stored content exactly as saved, including block types this build
    /// does not render. Interpreted through `NoteContent` only when rendering.
    pub content: Value,
    pub technology: Option<String>,
    pub category_name: String,
    pub category_slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<NoteWithCategoryRow> for Note {
    fn from(row: NoteWithCategoryRow) -> Self {
        Note {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            technology: row.technology,
            category_name: row.category_name,
            category_slug: row.category_slug,
            created_at: row.created_at,
        }
    }
}

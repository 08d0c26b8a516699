use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::content::{excerpt, normalize, render, to_html, Document, NoteContent, RenderOptions};
use crate::errors::AppError;
use crate::models::note::{CategoryRow, Note, NoteSummary};
use crate::state::AppState;

/// Characters of normalized markdown shown on a note card.
const EXCERPT_CHARS: usize = 100;
const MAX_SLUG_LEN: usize = 200;

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryRow>,
}

#[derive(Serialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteSummary>,
}

#[derive(Serialize)]
pub struct NoteResponse {
    pub note: Note,
    pub markdown: String,
    pub document: Document,
}

/// GET /api/notes
pub async fn handle_list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// GET /api/notes/:category
pub async fn handle_list_notes(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<NoteListResponse>, AppError> {
    validate_slug("category", &category)?;

    let category_row = state
        .store
        .find_category(&category)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {category} not found")))?;

    let notes = state
        .store
        .list_notes(category_row.id)
        .await?
        .into_iter()
        .map(|row| {
            let markdown = normalize(&NoteContent::from_value(row.content));
            NoteSummary {
                id: row.id,
                title: row.title,
                slug: row.slug,
                technology: row.technology,
                excerpt: excerpt(&markdown, EXCERPT_CHARS),
            }
        })
        .collect();

    Ok(Json(NoteListResponse { notes }))
}

/// GET /api/notes/:category/:slug
pub async fn handle_get_note(
    State(state): State<AppState>,
    Path((category, slug)): Path<(String, String)>,
    query: Result<Query<RenderOptions>, QueryRejection>,
) -> Result<Json<NoteResponse>, AppError> {
    let options = render_options(query)?;
    let note = load_note(&state, &category, &slug).await?;
    let markdown = normalize(&NoteContent::from_value(note.content.clone()));
    let document = render(&markdown, &options);
    debug!(
        "Rendered note {category}/{slug}: {} top-level nodes",
        document.children.len()
    );

    Ok(Json(NoteResponse {
        note,
        markdown,
        document,
    }))
}

/// GET /api/notes/:category/:slug/html
pub async fn handle_get_note_html(
    State(state): State<AppState>,
    Path((category, slug)): Path<(String, String)>,
    query: Result<Query<RenderOptions>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let options = render_options(query)?;
    let note = load_note(&state, &category, &slug).await?;
    let document = render(&normalize(&NoteContent::from_value(note.content)), &options);
    Ok(Html(to_html(&document)))
}

/// Malformed render options (e.g. an unknown `theme`) are a validation error
/// in the usual JSON envelope.
fn render_options(
    query: Result<Query<RenderOptions>, QueryRejection>,
) -> Result<RenderOptions, AppError> {
    query
        .map(|Query(options)| options)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

async fn load_note(state: &AppState, category: &str, slug: &str) -> Result<Note, AppError> {
    validate_slug("category", category)?;
    validate_slug("note", slug)?;

    state
        .store
        .find_note(category, slug)
        .await?
        .map(Note::from)
        .ok_or_else(|| AppError::NotFound(format!("Note {category}/{slug} not found")))
}

/// Slugs are lowercase-ish URL segments: ASCII letters, digits, `-` and `_`.
fn validate_slug(kind: &str, slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return Err(AppError::Validation(format!(
            "{kind} slug must be 1-{MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::Validation(format!(
            "{kind} slug '{slug}' contains invalid characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, seeded_app, RUST_CATEGORY_ID};
    use axum::http::StatusCode;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("note", "ownership-101").is_ok());
        assert!(validate_slug("note", "snake_case").is_ok());
        assert!(validate_slug("note", "").is_err());
        assert!(validate_slug("note", "../etc").is_err());
        assert!(validate_slug("note", &"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[tokio::test]
    async fn test_categories_ordered_by_name() {
        let (status, body) = get(seeded_app(), "/api/notes").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Rust", "Web"]);
        assert_eq!(body["categories"][0]["id"], RUST_CATEGORY_ID.to_string());
    }

    #[tokio::test]
    async fn test_notes_listing_has_excerpts() {
        let (status, body) = get(seeded_app(), "/api/notes/rust").await;
        assert_eq!(status, StatusCode::OK);
        let notes = body["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["title"], "Lifetimes");
        assert_eq!(notes[1]["slug"], "ownership");
        assert_eq!(notes[1]["excerpt"], "Moves\n\n```rust\nlet b = a;\n```");
        assert!(notes[0]["excerpt"].as_str().unwrap().ends_with("..."));
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let (status, body) = get(seeded_app(), "/api/notes/haskell").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_slug_is_400() {
        let (status, body) = get(seeded_app(), "/api/notes/rust/bad%20slug").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_block_note_renders() {
        let (status, body) = get(seeded_app(), "/api/notes/rust/ownership?theme=dark").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["note"]["category_name"], "Rust");
        assert_eq!(body["note"]["category_slug"], "rust");
        assert_eq!(body["markdown"], "Moves\n\n```rust\nlet b = a;\n```");

        let code = &body["document"]["children"][1];
        assert_eq!(code["kind"], "code_block");
        assert_eq!(code["language"], "rust");
        assert_eq!(code["accent"], "neutral");
        assert_eq!(code["code"], "let b = a;");
        assert!(code["container_class"]
            .as_str()
            .unwrap()
            .ends_with("bg-gray-800 text-gray-100"));
    }

    #[tokio::test]
    async fn test_unknown_theme_is_validation_error() {
        for uri in [
            "/api/notes/web/flexbox?theme=purple",
            "/api/notes/web/flexbox/html?theme=purple",
        ] {
            let (status, body) = get(seeded_app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{uri}");
            assert!(body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("purple"));
        }
    }

    #[tokio::test]
    async fn test_theme_defaults_to_light() {
        let (status, body) = get(seeded_app(), "/api/notes/rust/ownership").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["document"]["children"][1]["container_class"]
            .as_str()
            .unwrap()
            .ends_with("bg-gray-100 text-gray-800"));
    }

    #[tokio::test]
    async fn test_legacy_note_passes_markdown_through() {
        let (status, body) = get(seeded_app(), "/api/notes/web/flexbox").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["note"]["content"], "## Flexbox\n\n`display: flex`");
        assert_eq!(body["markdown"], "## Flexbox\n\n`display: flex`");
        assert_eq!(body["document"]["children"][0]["kind"], "heading");
    }

    #[tokio::test]
    async fn test_unknown_blocks_are_served_as_stored() {
        let (status, body) = get(seeded_app(), "/api/notes/web/grid").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["note"]["content"][0]["type"], "diagram");
        assert_eq!(body["note"]["content"][0]["src"], "grid.svg");
        assert_eq!(body["markdown"], "\n\nGrid areas");
        assert_eq!(body["document"]["children"][0]["kind"], "paragraph");
    }

    #[tokio::test]
    async fn test_missing_note_is_404() {
        let (status, _) = get(seeded_app(), "/api/notes/rust/traits").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get(seeded_app(), "/api/notes/web/ownership").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_note_html() {
        let (status, html) =
            crate::test_support::get_text(seeded_app(), "/api/notes/web/flexbox/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with("<h2 class=\"text-2xl font-bold mt-8 mb-4\">Flexbox</h2>"));
        assert!(html.contains("<code class=\"px-1 py-0.5"));
    }
}

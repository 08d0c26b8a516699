//! Shared fixtures for handler tests: a seeded `MemoryStore` behind the real router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::config::Config;
use crate::models::note::{CategoryRow, NoteRow};
use crate::models::portfolio::{Education, ExperienceRow, Project, Skill};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MemoryStore;

pub const RUST_CATEGORY_ID: Uuid = Uuid::from_u128(0x0001);
pub const WEB_CATEGORY_ID: Uuid = Uuid::from_u128(0x0002);

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/folio_test".to_string(),
        database_max_connections: 1,
        storage_public_url: Some("https://cdn.example.com/project-images".to_string()),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

fn note(category_id: Uuid, id: u128, title: &str, slug: &str, content: Value) -> NoteRow {
    NoteRow {
        id: Uuid::from_u128(id),
        category_id,
        title: title.to_string(),
        slug: slug.to_string(),
        content,
        technology: Some("Rust".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

pub fn seeded_store() -> MemoryStore {
    MemoryStore {
        categories: vec![
            CategoryRow {
                id: WEB_CATEGORY_ID,
                name: "Web".to_string(),
                slug: "web".to_string(),
                description: None,
            },
            CategoryRow {
                id: RUST_CATEGORY_ID,
                name: "Rust".to_string(),
                slug: "rust".to_string(),
                description: Some("Systems notes".to_string()),
            },
        ],
        notes: vec![
            note(
                RUST_CATEGORY_ID,
                0x10,
                "Ownership",
                "ownership",
                json!([
                    {"type": "text", "content": "Moves"},
                    {"type": "code", "content": "let b = a;", "language": "rust"},
                ]),
            ),
            note(
                RUST_CATEGORY_ID,
                0x11,
                "Lifetimes",
                "lifetimes",
                json!("Lifetimes name the region of code a reference is valid for. \
                       The borrow checker compares them to reject dangling references."),
            ),
            note(
                WEB_CATEGORY_ID,
                0x21,
                "Grid",
                "grid",
                json!([
                    {"type": "diagram", "src": "grid.svg"},
                    {"type": "text", "content": "Grid areas"},
                ]),
            ),
            note(
                WEB_CATEGORY_ID,
                0x20,
                "Flexbox",
                "flexbox",
                json!("## Flexbox\n\n`display: flex`"),
            ),
        ],
        experience: vec![
            ExperienceRow {
                id: 1,
                title: "Intern".to_string(),
                company: "Acme".to_string(),
                period: "2019".to_string(),
                description: json!("Fixed bugs"),
                technologies: vec!["Python".to_string()],
                start_date: NaiveDate::from_ymd_opt(2019, 6, 1),
            },
            ExperienceRow {
                id: 2,
                title: "Backend Engineer".to_string(),
                company: "Globex".to_string(),
                period: "2021 - present".to_string(),
                description: json!(["Built the API", "Ran on-call"]),
                technologies: vec!["Rust".to_string(), "Postgres".to_string()],
                start_date: NaiveDate::from_ymd_opt(2021, 1, 15),
            },
        ],
        projects: vec![
            Project {
                id: 1,
                title: "Folio".to_string(),
                description: "This site".to_string(),
                technologies: vec!["Rust".to_string()],
                github_url: Some("https://github.com/example/folio".to_string()),
                demo_url: None,
                image: Some("folio.png".to_string()),
            },
            Project {
                id: 2,
                title: "Tiny".to_string(),
                description: "No screenshot".to_string(),
                technologies: vec![],
                github_url: None,
                demo_url: None,
                image: None,
            },
        ],
        education: vec![Education {
            id: 1,
            degree: "BSc Computer Science".to_string(),
            school: "State University".to_string(),
            period: "2015 - 2019".to_string(),
            description: "Systems track".to_string(),
            achievements: vec!["Dean's list".to_string()],
        }],
        skills: vec![
            Skill {
                id: 1,
                name: "Rust".to_string(),
                level: 90,
                category: "Languages".to_string(),
            },
            Skill {
                id: 2,
                name: "Postgres".to_string(),
                level: 120,
                category: "Data".to_string(),
            },
            Skill {
                id: 3,
                name: "Go".to_string(),
                level: 60,
                category: "Languages".to_string(),
            },
        ],
    }
}

pub fn seeded_app() -> Router {
    build_router(AppState {
        store: Arc::new(seeded_store()),
        config: test_config(),
    })
}

async fn send(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// GETs `uri` and parses the body as JSON.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = send(app, uri).await;
    (status, String::from_utf8(bytes).unwrap())
}

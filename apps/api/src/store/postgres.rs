use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::note::{CategoryRow, NoteRow, NoteWithCategoryRow};
use crate::models::portfolio::{Education, ExperienceRow, Project, Skill};
use crate::store::PortfolioStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRow>, AppError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT id, name, slug, description FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("Fetched {} categories", rows.len());
        Ok(rows)
    }

    async fn find_category(&self, slug: &str) -> Result<Option<CategoryRow>, AppError> {
        let row = sqlx::query_as(
            "SELECT id, name, slug, description FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_notes(&self, category_id: Uuid) -> Result<Vec<NoteRow>, AppError> {
        let rows: Vec<NoteRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, title, slug, content, technology, created_at
            FROM notes
            WHERE category_id = $1
            ORDER BY title ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        debug!("Fetched {} notes for category {category_id}", rows.len());
        Ok(rows)
    }

    async fn find_note(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<NoteWithCategoryRow>, AppError> {
        let row = sqlx::query_as(
            r#"
            SELECT n.id, n.title, n.slug, n.content, n.technology, n.created_at,
                   c.name AS category_name, c.slug AS category_slug
            FROM notes n
            INNER JOIN categories c ON c.id = n.category_id
            WHERE c.slug = $1 AND n.slug = $2
            "#,
        )
        .bind(category_slug)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceRow>, AppError> {
        let rows = sqlx::query_as(
            r#"
            SELECT id, title, company, period, description, technologies, start_date
            FROM experience
            ORDER BY start_date DESC NULLS LAST, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as(
            r#"
            SELECT id, title, description, technologies, github_url, demo_url, image
            FROM projects
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, degree, school, period, description, achievements FROM education ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, name, level, category FROM skills ORDER BY category ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

//! Portfolio store — read-side access to the portfolio datastore behind a trait.
//!
//! Default: `PgStore` (sqlx over PostgreSQL).
//! Tests: `MemoryStore`, seeded in-process.
//!
//! `AppState` holds an `Arc<dyn PortfolioStore>`, chosen at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::note::{CategoryRow, NoteRow, NoteWithCategoryRow};
use crate::models::portfolio::{Education, ExperienceRow, Project, Skill};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All note categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRow>, AppError>;

    async fn find_category(&self, slug: &str) -> Result<Option<CategoryRow>, AppError>;

    /// Notes of one category, ordered by title.
    async fn list_notes(&self, category_id: uuid::Uuid) -> Result<Vec<NoteRow>, AppError>;

    async fn find_note(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<NoteWithCategoryRow>, AppError>;

    /// Newest first by start date; rows without a start date last.
    async fn list_experience(&self) -> Result<Vec<ExperienceRow>, AppError>;

    /// Newest first by id.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn list_education(&self) -> Result<Vec<Education>, AppError>;

    /// Ordered by category, then name.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::note::{CategoryRow, NoteRow, NoteWithCategoryRow};
use crate::models::portfolio::{Education, ExperienceRow, Project, Skill};
use crate::store::PortfolioStore;

/// In-process store for handler tests. Applies the same orderings as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    pub categories: Vec<CategoryRow>,
    pub notes: Vec<NoteRow>,
    pub experience: Vec<ExperienceRow>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRow>, AppError> {
        let mut rows = self.categories.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_category(&self, slug: &str) -> Result<Option<CategoryRow>, AppError> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn list_notes(&self, category_id: Uuid) -> Result<Vec<NoteRow>, AppError> {
        let mut rows: Vec<NoteRow> = self
            .notes
            .iter()
            .filter(|n| n.category_id == category_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(rows)
    }

    async fn find_note(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<NoteWithCategoryRow>, AppError> {
        let Some(category) = self.categories.iter().find(|c| c.slug == category_slug) else {
            return Ok(None);
        };
        Ok(self
            .notes
            .iter()
            .find(|n| n.category_id == category.id && n.slug == slug)
            .map(|n| NoteWithCategoryRow {
                id: n.id,
                title: n.title.clone(),
                slug: n.slug.clone(),
                content: n.content.clone(),
                technology: n.technology.clone(),
                created_at: n.created_at,
                category_name: category.name.clone(),
                category_slug: category.slug.clone(),
            }))
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceRow>, AppError> {
        let mut rows = self.experience.clone();
        // Descending with None last: Some(a) > None under Option's Ord.
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut rows = self.projects.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn list_education(&self) -> Result<Vec<Education>, AppError> {
        let mut rows = self.education.clone();
        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let mut rows = self.skills.clone();
        rows.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));
        Ok(rows)
    }
}

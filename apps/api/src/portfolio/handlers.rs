use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::portfolio::{group_skills, Education, Experience, Project, Skill, SkillGroup};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ExperienceResponse {
    pub experience: Vec<Experience>,
}

#[derive(Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Serialize)]
pub struct EducationResponse {
    pub education: Vec<Education>,
}

#[derive(Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<Skill>,
    pub groups: Vec<SkillGroup>,
}

/// GET /api/experience
pub async fn handle_list_experience(
    State(state): State<AppState>,
) -> Result<Json<ExperienceResponse>, AppError> {
    let experience = state
        .store
        .list_experience()
        .await?
        .into_iter()
        .map(Experience::from)
        .collect();
    Ok(Json(ExperienceResponse { experience }))
}

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let base = state.config.storage_public_url.as_deref();
    let projects = state
        .store
        .list_projects()
        .await?
        .into_iter()
        .map(|project| project.with_public_image(base))
        .collect();
    Ok(Json(ProjectsResponse { projects }))
}

/// GET /api/education
pub async fn handle_list_education(
    State(state): State<AppState>,
) -> Result<Json<EducationResponse>, AppError> {
    let education = state.store.list_education().await?;
    Ok(Json(EducationResponse { education }))
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills: Vec<Skill> = state
        .store
        .list_skills()
        .await?
        .into_iter()
        .map(Skill::clamped)
        .collect();
    let groups = group_skills(&skills);
    Ok(Json(SkillsResponse { skills, groups }))
}

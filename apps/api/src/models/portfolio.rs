use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExperienceRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub period: String,
    /// A single string on older rows, a list of strings on newer ones.
    pub description: Value,
    pub technologies: Vec<String>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            title: row.title,
            company: row.company,
            period: row.period,
            description: description_lines(row.description),
            technologies: row.technologies,
        }
    }
}

/// Flattens a stored description into bullet lines.
/// Strings become one line, lists keep their string items, null is empty.
pub fn description_lines(value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(line) => vec![line],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(line) => Some(line),
                other => Some(other.to_string()),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    /// Storage key on the row; a public URL once served.
    pub image: Option<String>,
}

impl Project {
    pub fn with_public_image(mut self, storage_public_url: Option<&str>) -> Self {
        self.image = self
            .image
            .as_deref()
            .and_then(|key| public_image_url(storage_public_url, key));
        self
    }
}

/// Resolves a stored image key against the public storage base URL.
/// Absolute URLs and keys without a configured base are passed through.
pub fn public_image_url(storage_public_url: Option<&str>, key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    if key.starts_with("http://") || key.starts_with("https://") {
        return Some(key.to_string());
    }
    match storage_public_url {
        Some(base) => Some(format!("{base}/{}", key.trim_start_matches('/'))),
        None => Some(key.to_string()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: i64,
    pub degree: String,
    pub school: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Proficiency percentage, 0–100.
    pub level: i32,
    pub category: String,
}

impl Skill {
    /// Copy with `level` forced into 0–100.
    pub fn clamped(self) -> Self {
        Skill {
            level: self.level.clamp(0, 100),
            ..self
        }
    }
}

/// Skills sharing a category, for the grouped skills view.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Groups skills by category in order of first appearance, clamping levels
/// into 0–100.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let skill = skill.clone().clamped();
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }
    groups
}

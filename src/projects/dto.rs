use super::model::{Project, ProjectStatus};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    pub category: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "detailPage")]
    pub detail_page: String,
}

impl ProjectResponse {
    pub fn to_model(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            placeholder: self.placeholder,
            category: self.category,
            status: self.status,
            featured: self.featured,
            detail_page: self.detail_page,
        }
    }
}

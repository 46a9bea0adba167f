use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Short text shown in place of a project image
    pub placeholder: Option<String>,
    pub category: String,
    pub status: ProjectStatus,
    pub featured: bool,
    pub detail_page: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, strum::IntoStaticStr, strum::EnumString,
)]
#[serde(from = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Development,
    Planning,
    Completed,
    OnHold,
    Research,
    /// Any status the site has no wording for, kept as written
    #[strum(disabled)]
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        ProjectStatus::from_str(&raw).unwrap_or(ProjectStatus::Other(raw))
    }
}

impl ProjectStatus {
    /// CSS class and raw key
    pub fn key(&self) -> &str {
        match self {
            ProjectStatus::Other(raw) => raw,
            known => known.into(),
        }
    }

    /// Badge wording on the homepage cards
    pub fn short_label(&self) -> &str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Development => "In Development",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Research | ProjectStatus::Other(_) => self.key(),
        }
    }

    /// Badge wording on the projects page
    pub fn long_label(&self) -> &str {
        match self {
            ProjectStatus::Active => "Active Development",
            ProjectStatus::Development => "In Development",
            ProjectStatus::Planning => "Planning Phase",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Research => "Research Phase",
            ProjectStatus::Other(raw) => raw,
        }
    }
}

/// A project plus the presentation content looked up for it
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedProject {
    pub project: Project,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub detailed_description: String,
}

use super::filter::{category_slug, ProjectFilter};
use super::model::{EnrichedProject, Project};

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCard {
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub category: String,
    pub status_key: String,
    pub status_label: String,
    pub detail_page: String,
}

/// Homepage cards, featured projects only
pub fn featured_cards(projects: &[Project]) -> Vec<FeaturedCard> {
    projects
        .iter()
        .filter(|project| project.featured)
        .map(|project| FeaturedCard {
            title: project.title.clone(),
            description: project.description.clone(),
            placeholder: project
                .placeholder
                .clone()
                .unwrap_or_else(|| project.title.clone()),
            category: project.category.clone(),
            status_key: project.status.key().to_string(),
            status_label: project.status.short_label().to_string(),
            detail_page: project.detail_page.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub tech_stack: Vec<String>,
    pub detailed_description: String,
    pub features: Vec<String>,
    pub status_key: String,
    pub status_label: String,
    pub detail_page: String,
    pub visible: bool,
}

/// Projects page cards. Filtering hides cards instead of dropping them.
pub fn project_cards(projects: &[EnrichedProject], filter: &ProjectFilter) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|enriched| {
            let project = &enriched.project;
            let slug = category_slug(&project.category);

            ProjectCard {
                visible: filter.matches_slug(&slug),
                slug,
                title: project.title.clone(),
                tech_stack: enriched.tech_stack.clone(),
                detailed_description: enriched.detailed_description.clone(),
                features: enriched.features.clone(),
                status_key: project.status.key().to_string(),
                status_label: project.status.long_label().to_string(),
                detail_page: project.detail_page.clone(),
            }
        })
        .collect()
}

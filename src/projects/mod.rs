pub mod dto;
pub mod enrich;
pub mod filter;
pub mod model;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support {
    use super::model::{Project, ProjectStatus};

    pub fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("{} title", id),
            description: format!("{} description", id),
            placeholder: None,
            category: category.to_string(),
            status: ProjectStatus::Active,
            featured: true,
            detail_page: format!("project-{}.html", id),
        }
    }
}

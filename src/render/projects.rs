use super::page::Page;
use crate::projects::view::{FeaturedCard, ProjectCard};
use maud::{html, Markup};

pub const FEATURED_SECTION: &str = "projects";
pub const FEATURED_CONTAINER: &str = "projects-grid";
pub const PROJECTS_SECTION: &str = "projects-detailed";
pub const PROJECTS_CONTAINER: &str = "projects-container";

pub fn home_page() -> Page {
    Page::new("Home").with_section(FEATURED_SECTION, FEATURED_CONTAINER, Some("Featured Projects"))
}

pub fn projects_page() -> Page {
    Page::new("Projects").with_section(PROJECTS_SECTION, PROJECTS_CONTAINER, None)
}

pub fn featured_grid(cards: &[FeaturedCard]) -> Markup {
    html! {
        @for card in cards {
            div.project-card data-category=(card.category) data-status=(card.status_key) {
                div.project-image {
                    div.project-placeholder { (card.placeholder) }
                    div class={ "project-status " (card.status_key) } { (card.status_label) }
                }
                div.project-content {
                    h3 { (card.title) }
                    p { (card.description) }
                    a.btn-outline href=(card.detail_page) { "View Project" }
                }
            }
        }
    }
}

pub fn project_grid(cards: &[ProjectCard]) -> Markup {
    html! {
        @for card in cards {
            div.project-card-detailed data-category=(card.slug) style=[(!card.visible).then_some("display: none")] {
                div.project-image-detailed {
                    div.project-tech-stack {
                        @for tech in &card.tech_stack {
                            span.tech-tag { (tech) }
                        }
                    }
                }
                div.project-content-detailed {
                    h3 { (card.title) }
                    p.project-description { (card.detailed_description) }
                    div.project-features {
                        ul {
                            @for feature in &card.features {
                                li { (feature) }
                            }
                        }
                    }
                    div.project-status {
                        span class={ "status-badge " (card.status_key) } { (card.status_label) }
                    }
                    a.btn-outline href=(card.detail_page) { "View Details" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::enrich::enrich;
    use crate::projects::filter::ProjectFilter;
    use crate::projects::model::ProjectStatus;
    use crate::projects::test_support::project;
    use crate::projects::view::{featured_cards, project_cards};

    #[test_log::test]
    fn featured_card_should_show_status_badge() {
        let mut on_hold = project("rover", "Robotics");
        on_hold.status = ProjectStatus::OnHold;

        let rendered = featured_grid(&featured_cards(&[on_hold])).into_string();

        assert!(rendered.contains("<div class=\"project-status on-hold\">On Hold</div>"));
        assert!(rendered.contains("href=\"project-rover.html\""));
    }

    #[test_log::test]
    fn filtered_out_card_should_be_hidden() {
        let projects = vec![
            enrich(project("smart-campus", "IoT Systems")),
            enrich(project("rover", "Robotics")),
        ];

        let rendered =
            project_grid(&project_cards(&projects, &ProjectFilter::from_key("robotics"))).into_string();

        assert_eq!(rendered.matches("display: none").count(), 1);
        assert!(rendered.contains("data-category=\"iot-systems\" style=\"display: none\""));
    }
}

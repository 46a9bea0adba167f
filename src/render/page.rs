use maud::{html, Markup, DOCTYPE};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Mount target '{0}' not found")]
    MissingTarget(String),
}

#[derive(Debug, Clone)]
struct Section {
    id: String,
    container_id: String,
    heading: Option<String>,
    visible: bool,
    content: Markup,
}

/// A page made of named sections, each wrapping one container that content is mounted into
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    sections: Vec<Section>,
    replacement: Option<Markup>,
    overlay: Option<Markup>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![],
            replacement: None,
            overlay: None,
        }
    }

    pub fn with_section(mut self, id: &str, container_id: &str, heading: Option<&str>) -> Self {
        self.sections.push(Section {
            id: id.to_string(),
            container_id: container_id.to_string(),
            heading: heading.map(str::to_string),
            visible: true,
            content: html! {},
        });
        self
    }

    pub fn has_target(&self, container_id: &str) -> bool {
        self.sections
            .iter()
            .any(|section| section.container_id == container_id)
    }

    /// Replaces whatever the container held before
    pub fn mount(&mut self, container_id: &str, content: Markup) -> Result<(), RenderError> {
        let section = self
            .sections
            .iter_mut()
            .find(|section| section.container_id == container_id)
            .ok_or_else(|| RenderError::MissingTarget(container_id.to_string()))?;

        section.content = content;
        Ok(())
    }

    pub fn set_visible(&mut self, section_id: &str, visible: bool) -> Result<(), RenderError> {
        let section = self
            .sections
            .iter_mut()
            .find(|section| section.id == section_id)
            .ok_or_else(|| RenderError::MissingTarget(section_id.to_string()))?;

        section.visible = visible;
        Ok(())
    }

    /// Shows `content` instead of every section
    pub fn replace_sections(&mut self, content: Markup) {
        self.replacement = Some(content);
    }

    pub fn set_overlay(&mut self, overlay: Markup) {
        self.overlay = Some(overlay);
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    link rel="stylesheet" href="styles.css";
                }
                body {
                    main.container {
                        h1 { (self.title) }
                        @match &self.replacement {
                            Some(content) => { (content) }
                            None => {
                                @for part in &self.sections {
                                    section id=(part.id) style=(display(part.visible)) {
                                        @if let Some(heading) = &part.heading {
                                            h2.section-title { (heading) }
                                        }
                                        div id=(part.container_id) { (part.content) }
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(overlay) = &self.overlay {
                        (overlay)
                    }
                }
            }
        }
    }

    pub fn into_html(self) -> String {
        self.render().into_string()
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new("Events").with_section("upcoming-section", "upcoming-container", Some("Upcoming"))
    }

    #[test_log::test]
    fn mount_should_replace_container_content() {
        let mut page = page();

        page.mount("upcoming-container", html! { p { "first" } }).unwrap();
        page.mount("upcoming-container", html! { p { "second" } }).unwrap();

        let rendered = page.into_html();
        assert!(rendered.contains("<div id=\"upcoming-container\"><p>second</p></div>"));
        assert!(!rendered.contains("first"));
    }

    #[test_log::test]
    fn unknown_targets_should_be_reported() {
        let mut page = page();

        assert_eq!(
            page.mount("past-container", html! {}),
            Err(RenderError::MissingTarget("past-container".to_string()))
        );
        assert!(page.set_visible("past-section", false).is_err());
    }

    #[test_log::test]
    fn hidden_section_should_not_display() {
        let mut page = page();

        page.set_visible("upcoming-section", false).unwrap();

        assert!(page
            .into_html()
            .contains("<section id=\"upcoming-section\" style=\"display: none\">"));
    }

    #[test_log::test]
    fn replacement_should_hide_sections() {
        let mut page = page();

        page.replace_sections(html! { div.error-message { "oops" } });

        let rendered = page.into_html();
        assert!(rendered.contains("oops"));
        assert!(!rendered.contains("upcoming-section"));
    }
}

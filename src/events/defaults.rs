//! Fallback content for the detail view when a record leaves optional fields out.

use std::str::FromStr;

pub const PLACEHOLDER_AGENDA: &[&str] = &["Detailed agenda will be announced soon"];
pub const PLACEHOLDER_ORGANIZER: &str = "Event Organizing Team";

const BEGINNER_TAG: &str = "Beginner Friendly";
const ADVANCED_TAG: &str = "Advanced";

/// Event types with a curated default agenda. Any other label gets [`PLACEHOLDER_AGENDA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
pub enum EventKind {
    Workshop,
    Hackathon,
    Talk,
}

impl EventKind {
    pub fn default_agenda(&self) -> &'static [&'static str] {
        match self {
            EventKind::Workshop => &[
                "Introduction and setup",
                "Hands-on session",
                "Project building",
                "Q&A and wrap-up",
            ],
            EventKind::Hackathon => &[
                "Opening ceremony and team formation",
                "Hacking begins",
                "Mentor check-ins",
                "Final presentations and judging",
            ],
            EventKind::Talk => &[
                "Welcome and introductions",
                "Main presentation",
                "Q&A session",
                "Networking",
            ],
        }
    }
}

pub fn default_agenda(event_type: &str) -> Vec<String> {
    EventKind::from_str(event_type)
        .map(|kind| kind.default_agenda())
        .unwrap_or(PLACEHOLDER_AGENDA)
        .iter()
        .map(|item| item.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisites {
    NoExperience,
    ExperienceRecommended,
    General,
}

impl Prerequisites {
    /// Beginner tag takes precedence when both tags are present
    pub fn from_tags(tags: &[String]) -> Self {
        if tags.iter().any(|tag| tag == BEGINNER_TAG) {
            Prerequisites::NoExperience
        } else if tags.iter().any(|tag| tag == ADVANCED_TAG) {
            Prerequisites::ExperienceRecommended
        } else {
            Prerequisites::General
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Prerequisites::NoExperience => {
                "No prior experience required! Just bring your enthusiasm and a laptop."
            }
            Prerequisites::ExperienceRecommended => {
                "Prior programming and hardware experience is recommended."
            }
            Prerequisites::General => {
                "Basic familiarity with technology is helpful but not required."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|tag| tag.to_string()).collect()
    }

    #[test_log::test]
    fn workshop_should_get_four_item_agenda() {
        let agenda = default_agenda("Workshop");

        assert_eq!(
            agenda,
            vec![
                "Introduction and setup",
                "Hands-on session",
                "Project building",
                "Q&A and wrap-up"
            ]
        );
    }

    #[test_log::test]
    fn unknown_type_should_get_placeholder_agenda() {
        assert_eq!(
            default_agenda("Meetup"),
            vec!["Detailed agenda will be announced soon"]
        );
    }

    #[test_log::test]
    fn type_lookup_should_be_case_sensitive() {
        assert_eq!(default_agenda("workshop").len(), 1);
    }

    #[test_log::test]
    fn prerequisites_should_follow_tags() {
        assert_eq!(
            Prerequisites::from_tags(&tags(&["Hardware", "Beginner Friendly"])),
            Prerequisites::NoExperience
        );
        assert_eq!(
            Prerequisites::from_tags(&tags(&["Advanced"])),
            Prerequisites::ExperienceRecommended
        );
        assert_eq!(
            Prerequisites::from_tags(&tags(&["AI"])),
            Prerequisites::General
        );
        assert_eq!(Prerequisites::from_tags(&[]), Prerequisites::General);
    }
}

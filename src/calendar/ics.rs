use crate::events::model::Event;
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use lazy_static::lazy_static;
use regex::Regex;

pub const CALENDAR_MIME_TYPE: &str = "text/calendar";
pub const CALENDAR_DIR: &str = "calendar";

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new("[^a-zA-Z0-9]").expect("Failed to create filename regex");
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarFile {
    pub filename: String,
    pub content: String,
}

impl CalendarFile {
    pub fn mime_type(&self) -> &'static str {
        CALENDAR_MIME_TYPE
    }
}

/// Single-event iCalendar document for the event
pub fn build_calendar_file(
    event: &Event,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
    uid_domain: &str,
) -> CalendarFile {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, uid_domain));
    ics_event.summary(&event.title);
    ics_event.starts(*start);
    ics_event.ends(*end);
    ics_event.description(&file_description(event));
    ics_event.location(&event.location);
    ics_event.add_property("STATUS", "CONFIRMED");
    ics_event.add_property("SEQUENCE", "0");

    cal.push(ics_event.done());

    CalendarFile {
        filename: calendar_filename(&event.title),
        content: cal.done().to_string(),
    }
}

/// Every non-alphanumeric character becomes `_`, e.g. "AI & ML: Intro!" is `ai___ml__intro_.ics`
pub fn calendar_filename(title: &str) -> String {
    format!("{}.ics", file_stem(title))
}

/// Site-relative path of an event's calendar file. Each event gets its own directory so
/// events sharing a title keep separate files.
pub fn calendar_file_path(event_id: &str, filename: &str) -> String {
    format!("{}/{}/{}", CALENDAR_DIR, file_stem(event_id), filename)
}

pub fn file_stem(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, "_").to_lowercase()
}

fn file_description(event: &Event) -> String {
    format!(
        "{}\n\nRegister: {}",
        event.description, event.registration.url
    )
}

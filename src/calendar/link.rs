use super::schedule::compact_utc;
use crate::events::model::Event;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use reqwest::Url;

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const CALENDAR_ACTION: &str = "TEMPLATE";

/// Deep link that opens a prefilled "new event" form in the calendar service
pub fn build_calendar_link(event: &Event, start: &DateTime<Utc>, end: &DateTime<Utc>) -> Url {
    let dates = format!("{}/{}", compact_utc(start), compact_utc(end));
    let details = link_details(event);

    let mut link = Url::parse_with_params(
        CALENDAR_RENDER_URL,
        &[
            ("action", CALENDAR_ACTION),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", details.as_str()),
            ("location", event.location.as_str()),
        ],
    )
    .expect("Calendar render URL is a valid base");

    // Form encoding writes spaces as `+` and escapes literal pluses, so every `+` left is a space
    let query = link.query().map(|query| query.replace('+', "%20"));
    link.set_query(query.as_deref());

    link
}

fn link_details(event: &Event) -> String {
    let mut details = format!("{}\n\nLocation: {}", event.description, event.location);

    if !event.organizers.is_empty() {
        details.push_str(&format!("\nOrganizers: {}", event.organizers.iter().join(", ")));
    }

    details
}

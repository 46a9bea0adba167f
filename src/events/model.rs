use serde::Deserialize;

const DEFAULT_UPCOMING_UNIT: &str = "spots";
const DEFAULT_PAST_UNIT: &str = "students";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub status: EventStatus,
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub date: EventDate,
    /// Free text range, e.g. "2:00 PM - 6:00 PM"
    pub time: String,
    pub location: String,
    pub capacity: Option<Capacity>,
    pub tags: Vec<String>,
    /// Empty means the agenda is derived from the event type
    pub agenda: Vec<String>,
    pub prerequisites: Option<String>,
    pub organizers: Vec<String>,
    pub registration: Registration,
}

impl Event {
    pub fn is_past(&self) -> bool {
        self.status == EventStatus::Past
    }

    pub fn type_key(&self) -> String {
        self.event_type.to_lowercase()
    }

    /// Value of the card's `data-category` attribute
    pub fn category(&self) -> String {
        let status: &'static str = self.status.into();

        format!("{} {}", status, self.type_key())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::IntoStaticStr, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

/// Kept as the catalog wrote it, never parsed into a timestamp here
#[derive(Debug, Clone, PartialEq)]
pub struct EventDate {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl EventDate {
    pub fn new(month: &str, day: &str, year: &str) -> Self {
        Self {
            month: month.to_string(),
            day: day.to_string(),
            year: year.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Capacity {
    pub total: u32,
    pub available: u32,
    pub registered: u32,
    pub unit: Option<String>,
}

impl Capacity {
    pub fn unit_for(&self, status: EventStatus) -> &str {
        match (&self.unit, status) {
            (Some(unit), _) => unit.as_str(),
            (None, EventStatus::Upcoming) => DEFAULT_UPCOMING_UNIT,
            (None, EventStatus::Past) => DEFAULT_PAST_UNIT,
        }
    }

    /// Card and detail wording differ between upcoming and past events
    pub fn describe(&self, status: EventStatus) -> String {
        let unit = self.unit_for(status);

        match status {
            EventStatus::Upcoming => {
                format!("Available {}: {}/{}", unit, self.available, self.total)
            }
            EventStatus::Past => format!("Attended by: {} {}", self.registered, unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub url: String,
    pub button_text: String,
}

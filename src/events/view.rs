use super::model::{Event, EventStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum ActionStyle {
    #[strum(serialize = "btn-primary")]
    Primary,
    #[strum(serialize = "btn-outline")]
    Outline,
}

impl ActionStyle {
    pub fn for_status(status: EventStatus) -> Self {
        match status {
            EventStatus::Upcoming => ActionStyle::Primary,
            EventStatus::Past => ActionStyle::Outline,
        }
    }

    pub fn class(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationAction {
    pub url: String,
    pub text: String,
    pub style: ActionStyle,
}

impl RegistrationAction {
    pub fn for_event(event: &Event) -> Self {
        Self {
            url: event.registration.url.clone(),
            text: event.registration.button_text.clone(),
            style: ActionStyle::for_status(event.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub status: EventStatus,
    pub category: String,
    pub month: String,
    pub day: String,
    pub year: String,
    pub type_label: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub location: String,
    pub capacity: Option<String>,
    pub tags: Vec<String>,
    pub registration: RegistrationAction,
}

impl EventCard {
    pub fn new(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            status: event.status,
            category: event.category(),
            month: event.date.month.clone(),
            day: event.date.day.clone(),
            year: event.date.year.clone(),
            type_label: event.event_type.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            capacity: event
                .capacity
                .as_ref()
                .map(|capacity| capacity.describe(event.status)),
            tags: event.tags.clone(),
            registration: RegistrationAction::for_event(event),
        }
    }

    pub fn is_past(&self) -> bool {
        self.status == EventStatus::Past
    }
}

/// Both event groups of the listing page, each in catalog order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventListing {
    pub upcoming: Vec<EventCard>,
    pub past: Vec<EventCard>,
}

impl EventListing {
    pub fn upcoming_visible(&self) -> bool {
        !self.upcoming.is_empty()
    }

    pub fn past_visible(&self) -> bool {
        !self.past.is_empty()
    }
}

pub fn build_listing(events: &[Event]) -> EventListing {
    let (past, upcoming): (Vec<EventCard>, Vec<EventCard>) =
        events.iter().map(EventCard::new).partition(EventCard::is_past);

    EventListing { upcoming, past }
}

/// Where a click on a card landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CardArea,
    Link,
    Button,
}

impl ClickTarget {
    /// Links and buttons inside a card keep their own behavior
    pub fn opens_detail(&self) -> bool {
        *self == ClickTarget::CardArea
    }
}

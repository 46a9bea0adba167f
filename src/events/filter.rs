use super::model::{Event, EventStatus};
use super::view::{build_listing, EventListing};
use crate::catalog::model::Catalog;
use itertools::Itertools;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

pub const ALL_FILTER_KEY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    All,
    /// Single key shared by statuses and lowercased type labels, matching either one
    Key(String),
    Status(EventStatus),
    /// Compared against the lowercased type label
    Type(String),
    StatusAndType(EventStatus, String),
}

impl EventFilter {
    /// Builds a filter from a filter button's key
    pub fn from_key(key: &str) -> Self {
        if key == ALL_FILTER_KEY {
            EventFilter::All
        } else {
            EventFilter::Key(key.to_string())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Key(key) => {
                let status: &'static str = event.status.into();

                status == key || event.type_key() == *key
            }
            EventFilter::Status(status) => event.status == *status,
            EventFilter::Type(event_type) => event.type_key() == event_type.to_lowercase(),
            EventFilter::StatusAndType(status, event_type) => {
                event.status == *status && event.type_key() == event_type.to_lowercase()
            }
        }
    }
}

/// Type labels that, lowercased, read as a status and would make a single-key filter match both
pub fn status_collisions(events: &[Event]) -> Vec<&str> {
    events
        .iter()
        .filter(|event| EventStatus::from_str(&event.type_key()).is_ok())
        .map(|event| event.event_type.as_str())
        .unique()
        .collect()
}

/// Owns the loaded events and the subset currently on display
#[derive(Debug)]
pub struct EventsManager {
    events: Vec<Event>,
    filtered_events: Vec<Event>,
    current_filter: EventFilter,
}

impl EventsManager {
    pub fn new(events: Vec<Event>) -> Self {
        for label in status_collisions(&events) {
            warn!(
                "Event type '{}' collides with a status filter key, single-key filters will match both",
                label
            );
        }

        Self {
            filtered_events: events.clone(),
            events,
            current_filter: EventFilter::All,
        }
    }

    pub fn from_catalog(catalog: Catalog<Event>) -> Self {
        info!("Managing {} events ({:?})", catalog.records.len(), catalog.origin);

        Self::new(catalog.records)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered_events
    }

    pub fn current_filter(&self) -> &EventFilter {
        &self.current_filter
    }

    /// Replaces the displayed subset and returns the re-rendered listing
    #[instrument(skip(self))]
    pub fn apply_filter(&mut self, filter: EventFilter) -> EventListing {
        self.filtered_events = match &filter {
            EventFilter::All => self.events.clone(),
            filter => self
                .events
                .iter()
                .filter(|event| filter.matches(event))
                .cloned()
                .collect(),
        };

        debug!(
            "Filter kept {} of {} events",
            self.filtered_events.len(),
            self.events.len()
        );

        self.current_filter = filter;
        self.render()
    }

    pub fn render(&self) -> EventListing {
        build_listing(&self.filtered_events)
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }
}

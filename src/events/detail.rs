use super::defaults::{default_agenda, Prerequisites, PLACEHOLDER_ORGANIZER};
use super::model::{Event, EventStatus};
use super::view::{ClickTarget, RegistrationAction};
use crate::calendar::export::{CalendarExport, CalendarExporter};
use crate::calendar::CalendarError;
use chrono::TimeZone;
use tracing::{debug, instrument};

/// Every slot of the shared detail overlay, already filled with defaults
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub month: String,
    pub day: String,
    pub year: String,
    pub time: String,
    pub location: String,
    pub type_label: String,
    pub description: String,
    pub capacity: Option<String>,
    pub agenda: Vec<String>,
    pub prerequisites: String,
    pub organizers: Vec<String>,
    pub registration: RegistrationAction,
    pub calendar_action: bool,
}

pub fn present(event: &Event) -> DetailView {
    let agenda = if event.agenda.is_empty() {
        default_agenda(&event.event_type)
    } else {
        event.agenda.clone()
    };

    let prerequisites = event
        .prerequisites
        .clone()
        .unwrap_or_else(|| Prerequisites::from_tags(&event.tags).message().to_string());

    let organizers = if event.organizers.is_empty() {
        vec![PLACEHOLDER_ORGANIZER.to_string()]
    } else {
        event.organizers.clone()
    };

    DetailView {
        id: event.id.clone(),
        title: event.title.clone(),
        month: event.date.month.clone(),
        day: event.date.day.clone(),
        year: event.date.year.clone(),
        time: event.time.clone(),
        location: event.location.clone(),
        type_label: event.event_type.clone(),
        description: event.description.clone(),
        capacity: event
            .capacity
            .as_ref()
            .map(|capacity| capacity.describe(event.status)),
        agenda,
        prerequisites,
        organizers,
        registration: RegistrationAction::for_event(event),
        calendar_action: event.status == EventStatus::Upcoming,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Explicit,
    CloseButton,
    Backdrop,
    EscapeKey,
}

#[derive(Debug)]
struct OpenDetail {
    event: Event,
    view: DetailView,
}

/// The single overlay shared by every card, either hidden or showing one event
#[derive(Debug, Default)]
pub struct DetailOverlay {
    open: Option<OpenDetail>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.open.as_ref().map(|open| &open.view)
    }

    #[instrument(skip(self, event), fields(event = %event.id))]
    pub fn open(&mut self, event: &Event) -> &DetailView {
        debug!("Opening details");

        &self
            .open
            .insert(OpenDetail {
                event: event.clone(),
                view: present(event),
            })
            .view
    }

    /// Opens the overlay unless the click landed on a link or button inside the card
    pub fn on_card_click(&mut self, target: ClickTarget, event: &Event) -> bool {
        if !target.opens_detail() {
            return false;
        }

        self.open(event);
        true
    }

    /// Hides the overlay, a no-op when it is already hidden
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn dismiss(&mut self, trigger: CloseTrigger) {
        debug!("Closing details via {:?}", trigger);

        self.close();
    }

    /// `None` when nothing is open or the open event is not upcoming
    pub fn add_to_calendar<Tz: TimeZone>(
        &self,
        exporter: &CalendarExporter<Tz>,
    ) -> Option<Result<CalendarExport, CalendarError>> {
        self.open
            .as_ref()
            .filter(|open| open.view.calendar_action)
            .map(|open| exporter.export(&open.event))
    }
}

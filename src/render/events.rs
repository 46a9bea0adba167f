use super::page::Page;
use crate::calendar::export::CalendarExport;
use crate::calendar::ics::calendar_file_path;
use crate::events::detail::DetailView;
use crate::events::view::{EventCard, EventListing};
use maud::{html, Markup};
use tracing::error;

pub const UPCOMING_SECTION: &str = "upcoming-section";
pub const PAST_SECTION: &str = "past-section";
pub const UPCOMING_CONTAINER: &str = "upcoming-events-container";
pub const PAST_CONTAINER: &str = "past-events-container";
pub const DETAIL_OVERLAY_ID: &str = "event-modal";

pub fn events_page() -> Page {
    Page::new("Events")
        .with_section(UPCOMING_SECTION, UPCOMING_CONTAINER, Some("Upcoming Events"))
        .with_section(PAST_SECTION, PAST_CONTAINER, Some("Past Events"))
}

/// Clears both containers and mounts the listing. A missing target is logged and nothing is touched.
pub fn mount_listing(page: &mut Page, listing: &EventListing) {
    let missing = [UPCOMING_CONTAINER, PAST_CONTAINER]
        .into_iter()
        .filter(|container| !page.has_target(container))
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        error!("Event containers not found: {}", missing.join(", "));
        return;
    }

    let mounts = [
        (UPCOMING_CONTAINER, event_cards(&listing.upcoming)),
        (PAST_CONTAINER, event_cards(&listing.past)),
    ];

    for (container, cards) in mounts {
        if let Err(e) = page.mount(container, cards) {
            error!("Skipping mount: {}", e);
        }
    }

    let visibility = [
        (UPCOMING_SECTION, listing.upcoming_visible()),
        (PAST_SECTION, listing.past_visible()),
    ];

    for (section, visible) in visibility {
        if let Err(e) = page.set_visible(section, visible) {
            error!("Section not found: {}", e);
        }
    }
}

pub fn load_error_panel() -> Markup {
    html! {
        div.error-message {
            h3 { "Unable to load events" }
            p { "Please check your connection and try again." }
        }
    }
}

fn event_cards(cards: &[EventCard]) -> Markup {
    html! {
        @for card in cards {
            (event_card(card))
        }
    }
}

pub fn event_card(card: &EventCard) -> Markup {
    let is_past = card.is_past();

    html! {
        div.event-card-detailed.past-event[is_past] data-category=(card.category) data-event-id=(card.id) {
            div.event-date-card {
                div.event-month { (card.month) }
                div.event-day { (card.day) }
                div.event-year { (card.year) }
            }
            div.event-content-card {
                div.event-type { (card.type_label) }
                h3 { (card.title) }
                p.event-description { (card.description) }
                div.event-details {
                    div.event-time { (card.time) }
                    div.event-location { (card.location) }
                    @if let Some(capacity) = &card.capacity {
                        @if is_past {
                            div.event-attendance { (capacity) }
                        } @else {
                            div.event-capacity { (capacity) }
                        }
                    }
                }
                div.event-tags {
                    @for tag in &card.tags {
                        span.tag { (tag) }
                    }
                }
                div.event-actions {
                    button.btn-details type="button" data-event-id=(card.id) { "View Details" }
                    a href=(card.registration.url) class=(card.registration.style.class()) {
                        (card.registration.text)
                    }
                }
            }
        }
    }
}

/// The shared overlay, hidden when `view` is `None`
pub fn detail_overlay(view: Option<&DetailView>, calendar: Option<&CalendarExport>) -> Markup {
    html! {
        div.modal.hidden[view.is_none()] id=(DETAIL_OVERLAY_ID) aria-hidden=(if view.is_none() { "true" } else { "false" }) {
            div.modal-backdrop data-close="backdrop" {}
            @if let Some(view) = view {
                div.modal-content role="dialog" aria-modal="true" {
                    button.modal-close type="button" data-close="button" { "×" }
                    h2 #modal-title { (view.title) }
                    div.modal-date {
                        span #modal-month { (view.month) }
                        " "
                        span #modal-day { (view.day) }
                        ", "
                        span #modal-year { (view.year) }
                    }
                    div #modal-time { (view.time) }
                    div #modal-location { (view.location) }
                    div #modal-type { (view.type_label) }
                    p #modal-description { (view.description) }
                    @if let Some(capacity) = &view.capacity {
                        div #modal-capacity-section {
                            h4 { "Capacity" }
                            p #modal-capacity { (capacity) }
                        }
                    }
                    div.modal-section {
                        h4 { "Agenda" }
                        ul #modal-agenda {
                            @for item in &view.agenda {
                                li { (item) }
                            }
                        }
                    }
                    div.modal-section {
                        h4 { "Prerequisites" }
                        p #modal-prerequisites { (view.prerequisites) }
                    }
                    div.modal-section {
                        h4 { "Organizers" }
                        div #modal-organizers {
                            @for organizer in &view.organizers {
                                span.organizer-chip { (organizer) }
                            }
                        }
                    }
                    div.modal-actions {
                        a #modal-register href=(view.registration.url) class=(view.registration.style.class()) {
                            (view.registration.text)
                        }
                        @if view.calendar_action {
                            @if let Some(calendar) = calendar {
                                a #modal-add-calendar.btn-outline href=(calendar.link.as_str()) target="_blank" rel="noopener" {
                                    "Add to Calendar"
                                }
                                a #modal-download-ics.btn-outline href=(calendar_file_path(&view.id, &calendar.file.filename)) download=(calendar.file.filename) {
                                    "Download .ics"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::export::CalendarExporter;
    use crate::events::detail::present;
    use crate::events::model::EventStatus;
    use crate::events::test_support::event;
    use crate::events::view::build_listing;
    use chrono::Utc;

    #[test_log::test]
    fn past_card_should_use_outline_action() {
        let card = EventCard::new(&event("p", EventStatus::Past, "Talk"));

        let rendered = event_card(&card).into_string();

        assert!(rendered.contains("class=\"event-card-detailed past-event\""));
        assert!(rendered.contains("class=\"btn-outline\""));
        assert!(rendered.contains("data-category=\"past talk\""));
    }

    #[test_log::test]
    fn card_text_should_be_escaped() {
        let mut record = event("x", EventStatus::Upcoming, "Talk");
        record.title = "<script>alert(1)</script>".to_string();

        let rendered = event_card(&EventCard::new(&record)).into_string();

        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test_log::test]
    fn missing_containers_should_leave_page_untouched() {
        let mut page = Page::new("Events");
        let listing = build_listing(&[event("u", EventStatus::Upcoming, "Talk")]);

        mount_listing(&mut page, &listing);

        assert!(!page.into_html().contains("event-card-detailed"));
    }

    #[test_log::test]
    fn partially_missing_containers_should_leave_page_untouched() {
        let mut page = Page::new("Events").with_section(
            UPCOMING_SECTION,
            UPCOMING_CONTAINER,
            Some("Upcoming Events"),
        );
        let listing = build_listing(&[
            event("u", EventStatus::Upcoming, "Talk"),
            event("p", EventStatus::Past, "Talk"),
        ]);

        mount_listing(&mut page, &listing);

        let rendered = page.into_html();
        assert!(!rendered.contains("event-card-detailed"));
        assert!(rendered.contains("<section id=\"upcoming-section\" style=\"display: block\">"));
    }

    #[test_log::test]
    fn download_link_should_point_into_the_event_directory() {
        let record = event("iot-101", EventStatus::Upcoming, "Workshop");
        let export = CalendarExporter::new(Utc, "club.example.org")
            .export(&record)
            .unwrap();

        let rendered = detail_overlay(Some(&present(&record)), Some(&export)).into_string();

        assert!(rendered.contains("href=\"calendar/iot_101/workshop_iot_101.ics\""));
        assert!(rendered.contains("download=\"workshop_iot_101.ics\""));
    }

    #[test_log::test]
    fn hidden_overlay_should_have_no_content() {
        let rendered = detail_overlay(None, None).into_string();

        assert!(rendered.contains("class=\"modal hidden\""));
        assert!(!rendered.contains("modal-title"));
    }

    #[test_log::test]
    fn past_overlay_should_not_offer_calendar() {
        let view = present(&event("p", EventStatus::Past, "Talk"));

        let rendered = detail_overlay(Some(&view), None).into_string();

        assert!(rendered.contains("class=\"modal\""));
        assert!(!rendered.contains("modal-add-calendar"));
    }
}

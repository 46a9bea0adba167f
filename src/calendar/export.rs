use super::ics::{build_calendar_file, CalendarFile};
use super::link::build_calendar_link;
use super::schedule::{derive_end, derive_start};
use super::CalendarError;
use crate::events::model::Event;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use reqwest::Url;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarExport {
    pub link: Url,
    pub file: CalendarFile,
}

/// Turns the free-text date and time of an event into calendar artifacts.
///
/// Times in the catalog are wall-clock times of `timezone`; every artifact carries UTC.
#[derive(Debug, Clone)]
pub struct CalendarExporter<Tz: TimeZone> {
    timezone: Tz,
    uid_domain: String,
}

impl<Tz: TimeZone> CalendarExporter<Tz> {
    pub fn new(timezone: Tz, uid_domain: &str) -> Self {
        Self {
            timezone,
            uid_domain: uid_domain.to_string(),
        }
    }

    pub fn schedule(&self, event: &Event) -> Result<(DateTime<Utc>, DateTime<Utc>), CalendarError> {
        let start = derive_start(&event.date, &event.time)?;
        let end = derive_end(start, &event.time);

        Ok((self.to_utc(start)?, self.to_utc(end)?))
    }

    pub fn calendar_link(&self, event: &Event) -> Result<Url, CalendarError> {
        let (start, end) = self.schedule(event)?;

        Ok(build_calendar_link(event, &start, &end))
    }

    pub fn calendar_file(&self, event: &Event) -> Result<CalendarFile, CalendarError> {
        let (start, end) = self.schedule(event)?;

        Ok(build_calendar_file(event, &start, &end, &self.uid_domain))
    }

    #[instrument(skip(self, event), fields(event = %event.id))]
    pub fn export(&self, event: &Event) -> Result<CalendarExport, CalendarError> {
        let (start, end) = self.schedule(event)?;

        Ok(CalendarExport {
            link: build_calendar_link(event, &start, &end),
            file: build_calendar_file(event, &start, &end, &self.uid_domain),
        })
    }

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>, CalendarError> {
        self.timezone
            .from_local_datetime(&local)
            .earliest()
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .ok_or(CalendarError::NonexistentLocalTime(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::model::{EventDate, EventStatus};
    use crate::events::test_support::event;
    use chrono::FixedOffset;

    #[test_log::test]
    fn local_times_should_be_exported_as_utc() {
        let lisbon_summer = FixedOffset::east_opt(3600).unwrap();
        let exporter = CalendarExporter::new(lisbon_summer, "club.example.org");

        let export = exporter
            .export(&event("iot", EventStatus::Upcoming, "Workshop"))
            .unwrap();

        assert!(export
            .link
            .as_str()
            .contains("dates=20240315T130000Z%2F20240315T170000Z"));
        assert!(export.file.content.contains("DTSTART:20240315T130000Z"));
        assert!(export.file.content.contains("DTEND:20240315T170000Z"));
    }

    #[test_log::test]
    fn unparseable_date_should_fail_every_export() {
        let exporter = CalendarExporter::new(Utc, "club.example.org");
        let mut record = event("iot", EventStatus::Upcoming, "Workshop");
        record.date = EventDate::new("???", "1", "2024");

        assert!(exporter.export(&record).is_err());
        assert!(exporter.calendar_link(&record).is_err());
        assert!(exporter.calendar_file(&record).is_err());
    }
}

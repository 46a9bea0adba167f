use super::model::{Capacity, Event, EventDate, EventStatus, Registration};
use serde::{de, Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventResponse>,
}

// Note: unknown fields are ignored, optional fields fall back to derived defaults later on
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    pub status: EventStatus,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub date: ResponseDate,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub capacity: Option<ResponseCapacity>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub agenda: Option<Vec<String>>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub organizers: Option<SingleOrVec<String>>,
    pub registration: ResponseRegistration,
}

impl EventResponse {
    pub fn to_model(self) -> Event {
        let organizers = match self.organizers {
            None => vec![],
            Some(SingleOrVec::Single(organizer)) => vec![organizer],
            Some(SingleOrVec::Vec(organizers)) => organizers,
        };

        Event {
            id: self.id,
            status: self.status,
            event_type: self.event_type,
            title: self.title,
            description: self.description,
            date: EventDate {
                month: self.date.month,
                day: self.date.day,
                year: self.date.year,
            },
            time: self.time,
            location: self.location,
            capacity: self.capacity.map(|capacity| Capacity {
                total: capacity.total,
                available: capacity.available,
                registered: capacity.registered,
                unit: capacity.unit.filter(|unit| !unit.is_empty()),
            }),
            tags: self.tags,
            agenda: self.agenda.unwrap_or_default(),
            prerequisites: self.prerequisites.filter(|text| !text.trim().is_empty()),
            organizers,
            registration: Registration {
                url: self.registration.url,
                button_text: self.registration.button_text,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseDate {
    pub month: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub day: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseCapacity {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub registered: u32,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseRegistration {
    pub url: String,
    #[serde(rename = "buttonText")]
    pub button_text: String,
}

/// Accepts either a string or a number, since catalogs write both (`"15"` and `15`)
fn deserialize_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        unknown => Err(de::Error::custom(format!(
            "expected a string or a number, found {}",
            unknown
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_EVENT: &str = r##"
      {
        "events": [{
          "id": "iot-workshop-2024",
          "status": "upcoming",
          "type": "Workshop",
          "title": "Intro to IoT",
          "description": "Build your first connected sensor.",
          "date": { "month": "Mar", "day": 15, "year": "2024" },
          "time": "2:00 PM - 6:00 PM",
          "location": "Engineering Lab 2",
          "capacity": { "total": 30, "available": 12, "registered": 18 },
          "tags": ["Beginner Friendly", "Hardware"],
          "organizers": "IoT Club",
          "registration": { "url": "https://forms.example.com/iot", "buttonText": "Register Now" },
          "image": "ignored.png"
        }]
      }"##;

    #[test_log::test]
    fn should_deserialize_numeric_date_parts_as_text() {
        let response = serde_json::from_str::<EventsResponse>(FULL_EVENT);

        assert!(response.is_ok(), "{:?}", response);

        let event = response.unwrap().events.remove(0).to_model();

        assert_eq!(event.date, EventDate::new("Mar", "15", "2024"));
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.registration.button_text, "Register Now");
    }

    #[test_log::test]
    fn should_accept_a_single_organizer() {
        let event = serde_json::from_str::<EventsResponse>(FULL_EVENT)
            .unwrap()
            .events
            .remove(0)
            .to_model();

        assert_eq!(event.organizers, vec!["IoT Club".to_string()]);
    }

    #[test_log::test]
    fn missing_optional_fields_should_become_empty() {
        let event = serde_json::from_str::<EventResponse>(
            r##"{
              "id": 7,
              "status": "past",
              "type": "Talk",
              "title": "Robots in Space",
              "description": "A talk.",
              "date": { "month": "Jan", "day": "9", "year": 2023 },
              "time": "5:00 PM",
              "location": "Auditorium",
              "tags": [],
              "registration": { "url": "#", "buttonText": "View Recap" }
            }"##,
        )
        .unwrap()
        .to_model();

        assert_eq!(event.id, "7");
        assert!(event.capacity.is_none());
        assert!(event.agenda.is_empty());
        assert!(event.organizers.is_empty());
        assert!(event.prerequisites.is_none());
    }

    #[test_log::test]
    fn missing_tags_should_fail_the_document() {
        let response = serde_json::from_str::<EventResponse>(
            r##"{
              "id": "no-tags",
              "status": "upcoming",
              "type": "Talk",
              "title": "t",
              "description": "d",
              "date": { "month": "Jan", "day": "9", "year": "2023" },
              "time": "5:00 PM",
              "location": "l",
              "registration": { "url": "#", "buttonText": "b" }
            }"##,
        );

        assert!(response.is_err());
    }

    #[test_log::test]
    fn unknown_status_should_fail_the_document() {
        let response = serde_json::from_str::<EventStatus>(r#""cancelled""#);

        assert!(response.is_err());
    }
}

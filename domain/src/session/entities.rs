//! Session domain entities

use serde::{Deserialize, Serialize};

/// A single talk in the agenda feed (Entity)
///
/// Sessions are immutable once fetched; a refresh replaces the whole list.
/// Field names on the wire are camelCase (`timeInterval`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub speaker: String,
    pub date: String,
    pub time_interval: String,
    pub description: String,
    pub image_url: String,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        speaker: impl Into<String>,
        date: impl Into<String>,
        time_interval: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            speaker: speaker.into(),
            date: date.into(),
            time_interval: time_interval.into(),
            description: description.into(),
            image_url: String::new(),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Date and time interval as a single line, e.g. `"2021-05-01, 10:00-11:00"`
    pub fn schedule(&self) -> String {
        format!("{}, {}", self.date, self.time_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "id": "7",
            "speaker": "Anna K.",
            "date": "19 апреля",
            "timeInterval": "10:00-11:00",
            "description": "Compose in production",
            "imageUrl": "https://example.com/anna.png"
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "7");
        assert_eq!(session.time_interval, "10:00-11:00");
        assert_eq!(session.image_url, "https://example.com/anna.png");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"id": "1", "speaker": "Bob"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let session = Session::new("1", "Alice", "2021-05-01", "10:00", "Talk");
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["timeInterval"], "10:00");
        assert!(value.get("time_interval").is_none());
    }

    #[test]
    fn test_schedule() {
        let session = Session::new("1", "Alice", "2021-05-01", "10:00-11:00", "Talk");
        assert_eq!(session.schedule(), "2021-05-01, 10:00-11:00");
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Storage shape of a row in `DevEventSpeakers`.
#[derive(Debug, Clone, PartialEq)]
pub struct DevEventSpeaker {
    pub id: Uuid,
    pub dev_event_id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: Option<String>,
    pub linkedin_profile: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DevEventSpeakerInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub talk_title: String,
    #[validate(length(max = 200))]
    pub talk_description: Option<String>,
    #[validate(length(max = 256))]
    pub linkedin_profile: Option<String>,
}

impl DevEventSpeakerInput {
    /// The parent reference always comes from the request path, never from the body.
    pub fn into_speaker(self, dev_event_id: Uuid) -> DevEventSpeaker {
        DevEventSpeaker {
            id: Uuid::now_v7(),
            dev_event_id,
            name: self.name,
            talk_title: self.talk_title,
            talk_description: self.talk_description,
            linkedin_profile: self.linkedin_profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevEventSpeakerView {
    pub id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: Option<String>,
    pub linkedin_profile: Option<String>,
}

impl From<DevEventSpeaker> for DevEventSpeakerView {
    fn from(speaker: DevEventSpeaker) -> Self {
        Self {
            id: speaker.id,
            name: speaker.name,
            talk_title: speaker.talk_title,
            talk_description: speaker.talk_description,
            linkedin_profile: speaker.linkedin_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> DevEventSpeakerInput {
        serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "talkTitle": "Rust Basics",
            "talkDescription": "",
            "linkedinProfile": ""
        }))
        .unwrap()
    }

    #[test]
    fn test_into_speaker_takes_parent_from_argument() {
        let parent = Uuid::new_v4();
        let speaker = ana().into_speaker(parent);

        assert_eq!(speaker.dev_event_id, parent);
        assert_eq!(speaker.name, "Ana");
        assert_eq!(speaker.talk_description.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_optional_fields_are_valid() {
        assert!(ana().validate().is_ok());
    }

    #[test]
    fn test_length_limits() {
        let mut body = ana();
        body.linkedin_profile = Some("l".repeat(256));
        assert!(body.validate().is_ok());

        body.linkedin_profile = Some("l".repeat(257));
        assert!(body.validate().is_err());

        let mut body = ana();
        body.talk_title = "t".repeat(101);
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_name_is_required() {
        let missing = serde_json::json!({ "talkTitle": "Rust Basics" });
        assert!(serde_json::from_value::<DevEventSpeakerInput>(missing).is_err());

        let mut body = ana();
        body.name = String::new();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = DevEventSpeakerView::from(ana().into_speaker(Uuid::new_v4()));
        let json = serde_json::to_value(view).unwrap();

        assert_eq!(json["talkTitle"], "Rust Basics");
        assert_eq!(json["linkedinProfile"], "");
        assert!(json.get("devEventId").is_none());
    }
}

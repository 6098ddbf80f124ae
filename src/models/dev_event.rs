use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::dev_event_speaker::{DevEventSpeaker, DevEventSpeakerView};

/// Storage shape of a row in `DevEvents`, optionally carrying its speakers.
#[derive(Debug, Clone, PartialEq)]
pub struct DevEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_deleted: bool,
    pub speakers: Vec<DevEventSpeaker>,
}

impl DevEvent {
    /// Overwrites the mutable fields in place. Id, deletion flag and speakers are untouched.
    pub fn update(
        &mut self,
        title: String,
        description: Option<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) {
        self.title = title;
        self.description = description;
        self.start_date = start_date;
        self.end_date = end_date;
    }

    pub fn apply(&mut self, input: DevEventInput) {
        self.update(
            input.title,
            input.description,
            input.start_date,
            input.end_date,
        );
    }

    pub fn delete(&mut self) {
        self.is_deleted = true;
    }
}

/// Request body accepted by create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DevEventInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 200))]
    pub description: Option<String>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub end_date: DateTime<Utc>,
}

impl DevEventInput {
    /// Builds a fresh, active event with a newly generated id and no speakers.
    ///
    /// Ids are UUIDv7 so ordering by id follows creation order.
    pub fn into_dev_event(self) -> DevEvent {
        DevEvent {
            id: Uuid::now_v7(),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_deleted: false,
            speakers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevEventView {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub speakers: Vec<DevEventSpeakerView>,
}

impl From<DevEvent> for DevEventView {
    fn from(event: DevEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            speakers: event
                .speakers
                .into_iter()
                .map(DevEventSpeakerView::from)
                .collect(),
        }
    }
}

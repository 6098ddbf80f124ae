use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DevEventRepository, RepositoryError, RepositoryResult};
use crate::models::{DevEvent, DevEventSpeaker};

#[derive(Default)]
struct Tables {
    // Rows are kept in insertion order; speakers are never stored inside events.
    events: Vec<DevEvent>,
    speakers: Vec<DevEventSpeaker>,
}

/// Process-local store with the same semantics as the Postgres gateway.
#[derive(Default)]
pub struct MemoryDevEventRepository {
    tables: RwLock<Tables>,
}

impl MemoryDevEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speaker rows referencing `dev_event_id`, whether or not that event row exists.
    #[cfg(test)]
    pub async fn speakers_for(&self, dev_event_id: Uuid) -> Vec<DevEventSpeaker> {
        self.tables
            .read()
            .await
            .speakers
            .iter()
            .filter(|speaker| speaker.dev_event_id == dev_event_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DevEventRepository for MemoryDevEventRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_all_active_events(&self) -> RepositoryResult<Vec<DevEvent>> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .iter()
            .filter(|event| !event.is_deleted)
            .cloned()
            .collect())
    }

    async fn find_event_by_id(
        &self,
        id: Uuid,
        include_speakers: bool,
    ) -> RepositoryResult<Option<DevEvent>> {
        let tables = self.tables.read().await;
        let Some(event) = tables.events.iter().find(|event| event.id == id) else {
            return Ok(None);
        };

        let mut event = event.clone();
        if include_speakers {
            event.speakers = tables
                .speakers
                .iter()
                .filter(|speaker| speaker.dev_event_id == id)
                .cloned()
                .collect();
        }
        Ok(Some(event))
    }

    async fn insert_event(&self, event: &DevEvent) -> RepositoryResult<()> {
        let mut row = event.clone();
        row.speakers.clear();
        self.tables.write().await.events.push(row);
        Ok(())
    }

    async fn update_event(&self, event: &DevEvent) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.events.iter_mut().find(|row| row.id == event.id) {
            row.update(
                event.title.clone(),
                event.description.clone(),
                event.start_date,
                event.end_date,
            );
        }
        Ok(())
    }

    async fn soft_delete_event(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.events.iter_mut().find(|row| row.id == id) {
            row.delete();
        }
        Ok(())
    }

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if !tables
            .events
            .iter()
            .any(|event| event.id == speaker.dev_event_id)
        {
            return Err(RepositoryError::MissingDevEvent(speaker.dev_event_id));
        }
        tables.speakers.push(speaker.clone());
        Ok(())
    }

    async fn event_exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.events.iter().any(|event| event.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(title: &str) -> DevEvent {
        DevEvent {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: None,
            start_date: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 10, 17, 0, 0).unwrap(),
            is_deleted: false,
            speakers: Vec::new(),
        }
    }

    fn speaker(dev_event_id: Uuid, name: &str) -> DevEventSpeaker {
        DevEventSpeaker {
            id: Uuid::now_v7(),
            dev_event_id,
            name: name.to_string(),
            talk_title: "Rust Basics".to_string(),
            talk_description: None,
            linkedin_profile: None,
        }
    }

    #[tokio::test]
    async fn test_active_listing_skips_deleted_and_keeps_order() {
        let repo = MemoryDevEventRepository::new();
        let first = event("first");
        let second = event("second");
        let third = event("third");
        for e in [&first, &second, &third] {
            repo.insert_event(e).await.unwrap();
        }

        repo.soft_delete_event(second.id).await.unwrap();

        let titles: Vec<_> = repo
            .find_all_active_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[tokio::test]
    async fn test_find_by_id_loads_speakers_only_on_request() {
        let repo = MemoryDevEventRepository::new();
        let summit = event("summit");
        let other = event("other");
        repo.insert_event(&summit).await.unwrap();
        repo.insert_event(&other).await.unwrap();
        repo.insert_speaker(&speaker(summit.id, "Ana")).await.unwrap();
        repo.insert_speaker(&speaker(other.id, "Bob")).await.unwrap();
        repo.insert_speaker(&speaker(summit.id, "Caio")).await.unwrap();

        let bare = repo.find_event_by_id(summit.id, false).await.unwrap().unwrap();
        assert!(bare.speakers.is_empty());

        let full = repo.find_event_by_id(summit.id, true).await.unwrap().unwrap();
        let names: Vec<_> = full.speakers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Caio"]);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_deleted_rows() {
        let repo = MemoryDevEventRepository::new();
        let e = event("gone");
        repo.insert_event(&e).await.unwrap();
        repo.soft_delete_event(e.id).await.unwrap();

        let found = repo.find_event_by_id(e.id, false).await.unwrap().unwrap();
        assert!(found.is_deleted);
        assert!(repo.event_exists(e.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_ignores_deletion_flag_and_speakers() {
        let repo = MemoryDevEventRepository::new();
        let original = event("before");
        repo.insert_event(&original).await.unwrap();

        let mut changed = original.clone();
        changed.title = "after".to_string();
        changed.description = Some("now described".to_string());
        changed.is_deleted = true;
        changed.speakers.push(speaker(original.id, "Ana"));
        repo.update_event(&changed).await.unwrap();

        let stored = repo.find_event_by_id(original.id, true).await.unwrap().unwrap();
        assert_eq!(stored.title, "after");
        assert_eq!(stored.description.as_deref(), Some("now described"));
        assert!(!stored.is_deleted);
        assert!(stored.speakers.is_empty());
    }

    #[tokio::test]
    async fn test_speaker_requires_parent_row() {
        let repo = MemoryDevEventRepository::new();
        let orphan = Uuid::now_v7();

        let err = repo.insert_speaker(&speaker(orphan, "Ana")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::MissingDevEvent(id) if id == orphan));
        assert!(repo.speakers_for(orphan).await.is_empty());
        assert!(!repo.event_exists(orphan).await.unwrap());
    }
}

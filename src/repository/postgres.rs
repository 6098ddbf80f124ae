use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::schema::{dev_event_speakers, dev_events};
use super::{query, DevEventRepository, RepositoryResult};
use crate::models::{DevEvent, DevEventSpeaker};

pub struct PgDevEventRepository {
    pool: PgPool,
}

impl PgDevEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn speakers_of(&self, dev_event_id: Uuid) -> RepositoryResult<Vec<DevEventSpeaker>> {
        let sql = query::select(
            &dev_event_speakers::TABLE,
            &[dev_event_speakers::DEV_EVENT_ID],
        );
        let rows = sqlx::query(&sql)
            .bind(dev_event_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(speaker_from_row)
            .collect::<Result<_, _>>()?)
    }
}

fn event_from_row(row: &PgRow) -> Result<DevEvent, sqlx::Error> {
    Ok(DevEvent {
        id: row.try_get(dev_events::ID.name)?,
        title: row.try_get(dev_events::TITLE.name)?,
        description: row.try_get(dev_events::DESCRIPTION.name)?,
        start_date: row.try_get(dev_events::START_DATE.name)?,
        end_date: row.try_get(dev_events::END_DATE.name)?,
        is_deleted: row.try_get(dev_events::IS_DELETED.name)?,
        speakers: Vec::new(),
    })
}

fn speaker_from_row(row: &PgRow) -> Result<DevEventSpeaker, sqlx::Error> {
    Ok(DevEventSpeaker {
        id: row.try_get(dev_event_speakers::ID.name)?,
        dev_event_id: row.try_get(dev_event_speakers::DEV_EVENT_ID.name)?,
        name: row.try_get(dev_event_speakers::NAME.name)?,
        talk_title: row.try_get(dev_event_speakers::TALK_TITLE.name)?,
        talk_description: row.try_get(dev_event_speakers::TALK_DESCRIPTION.name)?,
        linkedin_profile: row.try_get(dev_event_speakers::LINKEDIN_PROFILE.name)?,
    })
}

#[async_trait]
impl DevEventRepository for PgDevEventRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn find_all_active_events(&self) -> RepositoryResult<Vec<DevEvent>> {
        let sql = query::select(&dev_events::TABLE, &[dev_events::IS_DELETED]);
        let rows = sqlx::query(&sql)
            .bind(false)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(event_from_row)
            .collect::<Result<_, _>>()?)
    }

    async fn find_event_by_id(
        &self,
        id: Uuid,
        include_speakers: bool,
    ) -> RepositoryResult<Option<DevEvent>> {
        let sql = query::select(&dev_events::TABLE, &[dev_events::ID]);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut event = event_from_row(&row)?;
        if include_speakers {
            event.speakers = self.speakers_of(id).await?;
        }
        Ok(Some(event))
    }

    async fn insert_event(&self, event: &DevEvent) -> RepositoryResult<()> {
        let sql = query::insert(&dev_events::TABLE);
        sqlx::query(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .bind(event.is_deleted)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_event(&self, event: &DevEvent) -> RepositoryResult<()> {
        let sql = query::update(
            &dev_events::TABLE,
            &[
                dev_events::TITLE,
                dev_events::DESCRIPTION,
                dev_events::START_DATE,
                dev_events::END_DATE,
            ],
        );
        sqlx::query(&sql)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .bind(event.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn soft_delete_event(&self, id: Uuid) -> RepositoryResult<()> {
        let sql = query::update(&dev_events::TABLE, &[dev_events::IS_DELETED]);
        sqlx::query(&sql)
            .bind(true)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> RepositoryResult<()> {
        let sql = query::insert(&dev_event_speakers::TABLE);
        sqlx::query(&sql)
            .bind(speaker.id)
            .bind(speaker.dev_event_id)
            .bind(&speaker.name)
            .bind(&speaker.talk_title)
            .bind(&speaker.talk_description)
            .bind(&speaker.linkedin_profile)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn event_exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let sql = query::exists(&dev_events::TABLE);
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

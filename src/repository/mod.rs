use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::config::{Config, StoreBackend};
use crate::models::{DevEvent, DevEventSpeaker};

pub mod memory;
pub mod postgres;
pub mod query;
pub mod schema;

pub use memory::MemoryDevEventRepository;
pub use postgres::PgDevEventRepository;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("dev event {0} does not exist")]
    MissingDevEvent(Uuid),
}

/// Every read and write against the event store goes through this gateway.
///
/// Deletion state is not interpreted here beyond `find_all_active_events`; callers decide
/// whether a soft-deleted row counts as found.
#[async_trait]
pub trait DevEventRepository: Send + Sync {
    /// Short name of the backing store, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Non-deleted events in creation order, without speakers.
    async fn find_all_active_events(&self) -> RepositoryResult<Vec<DevEvent>>;

    async fn find_event_by_id(
        &self,
        id: Uuid,
        include_speakers: bool,
    ) -> RepositoryResult<Option<DevEvent>>;

    async fn insert_event(&self, event: &DevEvent) -> RepositoryResult<()>;

    /// Persists title, description and dates. Other fields are ignored.
    async fn update_event(&self, event: &DevEvent) -> RepositoryResult<()>;

    async fn soft_delete_event(&self, id: Uuid) -> RepositoryResult<()>;

    async fn insert_speaker(&self, speaker: &DevEventSpeaker) -> RepositoryResult<()>;

    async fn event_exists(&self, id: Uuid) -> RepositoryResult<bool>;
}

/// Opens the store selected by `config`, running migrations for Postgres.
pub async fn connect(config: &Config) -> RepositoryResult<Arc<dyn DevEventRepository>> {
    match &config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryDevEventRepository::new()))
        }
        StoreBackend::Postgres(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Successfully connected to database");

            sqlx::migrate!().run(&pool).await?;

            tracing::info!("Migrations run successfully");

            Ok(Arc::new(PgDevEventRepository::new(pool)))
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use log::{info, warn};

use crate::{
    domain::{
        logic::entry_validator::EntryValidator,
        repositories::records_repository::RecordsRepository,
    },
    entities::{NewParkingRecord, ParkingRecord, RecordId},
};

#[async_trait]
pub trait EntryUsecase: Send + Sync {
    async fn submit(&self, entry: NewParkingRecord) -> Result<ParkingRecord, ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError>;
}

pub(crate) struct EntryUsecaseImpl<R: RecordsRepository> {
    records_repository: Arc<R>,
}

#[async_trait]
impl<R: RecordsRepository> EntryUsecase for EntryUsecaseImpl<R> {
    async fn submit(&self, entry: NewParkingRecord) -> Result<ParkingRecord, ServerError> {
        let validated = EntryValidator::new(entry).process().map_err(|e| {
            warn!("Rejected parking entry: {:?}", e);
            e
        })?;
        let record = self.records_repository.insert(validated).await?;
        info!(
            "Saved parking record {} for '{}' ({} at {}).",
            record.id, record.person_name, record.date, record.location
        );
        Ok(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.records_repository.delete(id).await
    }

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError> {
        self.records_repository.delete_many(ids).await
    }
}

impl<R: RecordsRepository> EntryUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>) -> Self {
        Self { records_repository }
    }
}

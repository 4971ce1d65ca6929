use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        records_csv_datasource::{RecordsCsvDatasource, RecordsCsvDatasourceImpl},
        records_store_datasource::RecordsStoreDatasource,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{ParkingRecord, RecordId, ValidatedParkingRecord},
};

pub(crate) struct RecordsRepositoryImpl<
    S,
    DS = RecordsCsvDatasourceImpl, // Default.
> where
    S: RecordsStoreDatasource,
    DS: RecordsCsvDatasource,
{
    store: S,
    csv_datasource: DS,
}

#[async_trait]
impl<S, DS> RecordsRepository for RecordsRepositoryImpl<S, DS>
where
    S: RecordsStoreDatasource,
    DS: RecordsCsvDatasource,
{
    async fn fetch_all(&self) -> Result<Vec<ParkingRecord>, ServerError> {
        self.store.fetch_all().await
    }

    async fn insert(&self, record: ValidatedParkingRecord) -> Result<ParkingRecord, ServerError> {
        self.store.insert(record).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.store.delete(id).await
    }

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError> {
        self.store.delete_many(ids).await
    }

    fn import_from_string(&self, records_csv: &str) -> Result<Vec<ParkingRecord>, ServerError> {
        self.csv_datasource.from_string(records_csv)
    }

    async fn import_from_file<P>(&self, records_csv: P) -> Result<Vec<ParkingRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.csv_datasource.from_file(records_csv).await
    }
}

impl<S: RecordsStoreDatasource> RecordsRepositoryImpl<S, RecordsCsvDatasourceImpl> {
    pub(crate) fn new(store: S) -> Self {
        RecordsRepositoryImpl {
            store,
            csv_datasource: RecordsCsvDatasourceImpl::new(),
        }
    }
}

// Lets callers keep a handle on a store they inject.
#[async_trait]
impl<T: RecordsStoreDatasource + ?Sized> RecordsStoreDatasource for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<ParkingRecord>, ServerError> {
        (**self).fetch_all().await
    }

    async fn insert(&self, record: ValidatedParkingRecord) -> Result<ParkingRecord, ServerError> {
        (**self).insert(record).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        (**self).delete(id).await
    }

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError> {
        (**self).delete_many(ids).await
    }
}

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{ParkingRecord, RecordId, ValidatedParkingRecord};

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ParkingRecord>, ServerError>;

    async fn insert(&self, record: ValidatedParkingRecord) -> Result<ParkingRecord, ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError>;

    fn import_from_string(&self, records_csv: &str) -> Result<Vec<ParkingRecord>, ServerError>;

    async fn import_from_file<P>(&self, records_csv: P) -> Result<Vec<ParkingRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

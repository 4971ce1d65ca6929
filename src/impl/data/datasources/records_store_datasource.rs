use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    entities::{ParkingRecord, RecordId, ValidatedParkingRecord},
    errors::RecordNotFound,
};

/// Record storage the application is wired against. The store assigns ids and
/// creation timestamps.
#[async_trait]
pub trait RecordsStoreDatasource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ParkingRecord>, ServerError>;

    async fn insert(&self, record: ValidatedParkingRecord) -> Result<ParkingRecord, ServerError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError>;

    /// Removes every listed record that exists, returning how many were removed.
    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError>;
}

/// Store kept in process memory.
#[derive(Default)]
pub struct MemoryRecordsDatasource {
    records: RwLock<Vec<ParkingRecord>>,
}

impl MemoryRecordsDatasource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing snapshot, e.g. one imported from CSV.
    pub fn with_records(records: Vec<ParkingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordsStoreDatasource for MemoryRecordsDatasource {
    async fn fetch_all(&self) -> Result<Vec<ParkingRecord>, ServerError> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, record: ValidatedParkingRecord) -> Result<ParkingRecord, ServerError> {
        let ValidatedParkingRecord {
            location,
            date,
            person_name,
            position,
            bank_account,
            duration_hours,
            is_custom_duration,
            hourly_rate,
            fee,
        } = record;
        let stored = ParkingRecord {
            id: RecordId(Uuid::new_v4().to_string()),
            location,
            date,
            person_name,
            position,
            bank_account,
            duration_hours,
            is_custom_duration,
            hourly_rate,
            fee: Some(fee),
            created_at: Some(Utc::now()),
        };
        self.records.write().await.push(stored.clone());
        debug!("Stored parking record {}.", stored.id);
        Ok(stored)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RecordNotFound::new(&id.0))?;
        records.remove(position);
        debug!("Deleted parking record {}.", id);
        Ok(())
    }

    async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !ids.contains(&r.id));
        let removed = before - records.len();
        info!("Deleted {} of {} requested parking records.", removed, ids.len());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::{ParkingLocation, Position};

    use super::*;

    fn validated(name: &str) -> ValidatedParkingRecord {
        ValidatedParkingRecord {
            location: ParkingLocation::ChildrensHallLot2,
            date: NaiveDate::from_ymd_opt(2024, 4, 7).unwrap(),
            person_name: name.into(),
            position: Position::Member,
            bank_account: "하나/1002".into(),
            duration_hours: 3.0,
            is_custom_duration: false,
            hourly_rate: 3000.0,
            fee: 9000.0,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let store = MemoryRecordsDatasource::new();
        let a = store.insert(validated("김")).await.unwrap();
        let b = store.insert(validated("이")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
        assert_eq!(a.fee, Some(9000.0));
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_unknown_id_fails() {
        let store = MemoryRecordsDatasource::new();
        store.insert(validated("김")).await.unwrap();
        assert!(store.delete(&RecordId("missing".into())).await.is_err());
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_many_counts_removed() {
        let store = MemoryRecordsDatasource::new();
        let a = store.insert(validated("김")).await.unwrap();
        let b = store.insert(validated("이")).await.unwrap();
        store.insert(validated("박")).await.unwrap();
        let removed = store
            .delete_many(&[a.id.clone(), b.id.clone(), RecordId("missing".into())])
            .await
            .unwrap();
        assert_eq!(removed, 2);
        let remaining = store.fetch_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].person_name, "박");
    }
}

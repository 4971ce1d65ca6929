use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::records_store_datasource::RecordsStoreDatasource,
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::{aggregator::Aggregator, suggester::Suggester},
        repositories::records_repository::RecordsRepository as _,
        usecases::{
            entry_usecase::{EntryUsecase as _, EntryUsecaseImpl},
            query_usecase::{QueryUsecase as _, QueryUsecaseImpl},
        },
    },
    entities::{
        Aggregation, AggregatorSettings, NewParkingRecord, ParkingRecord, RecordFilters, RecordId,
        SuggestQuery, Suggestion,
    },
};

/// Entry point for recording, querying and summarising parking-fee
/// reimbursements against an injected record store.
pub struct ParkingSettlementUtil<S>
where
    S: RecordsStoreDatasource,
{
    records_repository: Arc<RecordsRepositoryImpl<S>>,
    query_usecase: QueryUsecaseImpl<RecordsRepositoryImpl<S>>,
    entry_usecase: EntryUsecaseImpl<RecordsRepositoryImpl<S>>,
    settings: Arc<AggregatorSettings>,
}

impl<S> ParkingSettlementUtil<S>
where
    S: RecordsStoreDatasource,
{
    pub fn new(store: S) -> Self {
        Self::with_settings(store, AggregatorSettings::default())
    }

    pub fn with_settings(store: S, settings: AggregatorSettings) -> Self {
        let records_repository = Arc::new(RecordsRepositoryImpl::new(store));
        let settings = Arc::new(settings);
        Self {
            query_usecase: QueryUsecaseImpl::new(records_repository.clone(), settings.clone()),
            entry_usecase: EntryUsecaseImpl::new(records_repository.clone()),
            records_repository,
            settings,
        }
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    // Store-backed.
    // ---

    pub async fn submit(&self, entry: NewParkingRecord) -> Result<ParkingRecord, ServerError> {
        self.entry_usecase.submit(entry).await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), ServerError> {
        self.entry_usecase.delete(id).await
    }

    pub async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, ServerError> {
        self.entry_usecase.delete_many(ids).await
    }

    pub async fn records(&self) -> Result<Vec<ParkingRecord>, ServerError> {
        self.records_repository.fetch_all().await
    }

    pub async fn query(&self, filters: &RecordFilters) -> Result<Aggregation, ServerError> {
        self.query_usecase.query(filters).await
    }

    pub async fn suggest(&self, query: SuggestQuery<'_>) -> Result<Vec<Suggestion>, ServerError> {
        self.query_usecase.suggest(query).await
    }

    // CSV snapshots.
    // ---

    pub fn records_from_csv_string(
        &self,
        records_csv: &str,
    ) -> Result<Vec<ParkingRecord>, ServerError> {
        self.records_repository.import_from_string(records_csv)
    }

    pub async fn records_from_csv_file<P>(
        &self,
        records_csv: P,
    ) -> Result<Vec<ParkingRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.records_repository.import_from_file(records_csv).await
    }

    // Records already in hand.
    // ---

    pub fn aggregate(&self, records: &[ParkingRecord], filters: &RecordFilters) -> Aggregation {
        Aggregator::new(&self.settings).aggregate(records, filters)
    }

    pub fn suggest_from(
        &self,
        records: &[ParkingRecord],
        query: SuggestQuery<'_>,
    ) -> Vec<Suggestion> {
        Suggester::new(records, &self.settings).suggest(query)
    }
}

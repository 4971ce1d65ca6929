use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use log::debug;

use crate::{
    domain::{
        logic::{aggregator::Aggregator, suggester::Suggester},
        repositories::records_repository::RecordsRepository,
    },
    entities::{Aggregation, AggregatorSettings, RecordFilters, SuggestQuery, Suggestion},
};

#[async_trait]
pub trait QueryUsecase: Send + Sync {
    async fn query(&self, filters: &RecordFilters) -> Result<Aggregation, ServerError>;

    async fn suggest(&self, query: SuggestQuery<'_>) -> Result<Vec<Suggestion>, ServerError>;
}

pub(crate) struct QueryUsecaseImpl<R: RecordsRepository> {
    records_repository: Arc<R>,
    settings: Arc<AggregatorSettings>,
}

#[async_trait]
impl<R: RecordsRepository> QueryUsecase for QueryUsecaseImpl<R> {
    async fn query(&self, filters: &RecordFilters) -> Result<Aggregation, ServerError> {
        let records = self.records_repository.fetch_all().await?;
        let aggregation = Aggregator::new(&self.settings).aggregate(&records, filters);
        debug!(
            "Query matched {} of {} parking records (total fee {}).",
            aggregation.records.len(),
            records.len(),
            aggregation.total_fee
        );
        Ok(aggregation)
    }

    async fn suggest(&self, query: SuggestQuery<'_>) -> Result<Vec<Suggestion>, ServerError> {
        let records = self.records_repository.fetch_all().await?;
        Ok(Suggester::new(&records, &self.settings).suggest(query))
    }
}

impl<R: RecordsRepository> QueryUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>, settings: Arc<AggregatorSettings>) -> Self {
        Self {
            records_repository,
            settings,
        }
    }
}

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use crate::{
    domain::entities::parking_record::digits_only,
    entities::{AggregatorSettings, ParkingRecord, SuggestQuery, Suggestion},
};

use super::utils::effective_timestamp;

/// Latest record per distinct name, in order of first appearance.
struct LatestByName<'r> {
    order: Vec<&'r str>,
    latest: HashMap<&'r str, (&'r ParkingRecord, NaiveDateTime)>,
}

impl<'r> LatestByName<'r> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            latest: HashMap::new(),
        }
    }

    /// Keeps `record` if it is strictly newer than what is held for its name.
    fn step(mut self, record: &'r ParkingRecord, ts: NaiveDateTime) -> Self {
        let name = record.person_name.as_str();
        match self.latest.get(name).map(|(_, held)| ts > *held) {
            Some(false) => {}
            Some(true) => {
                self.latest.insert(name, (record, ts));
            }
            None => {
                self.order.push(name);
                self.latest.insert(name, (record, ts));
            }
        }
        self
    }

    fn into_records(self) -> Vec<&'r ParkingRecord> {
        let mut latest = self.latest;
        self.order
            .into_iter()
            .filter_map(|name| latest.remove(name).map(|(r, _)| r))
            .collect()
    }
}

pub(crate) struct Suggester<'r> {
    latest: Vec<&'r ParkingRecord>,
    limit: usize,
}

impl<'r> Suggester<'r> {
    pub(crate) fn new(records: &'r [ParkingRecord], settings: &AggregatorSettings) -> Self {
        let latest = records
            .iter()
            .fold(LatestByName::new(), |acc, r| {
                acc.step(r, effective_timestamp(r, settings))
            })
            .into_records();
        Self {
            latest,
            limit: settings.suggestion_limit,
        }
    }

    pub(crate) fn suggest(&self, query: SuggestQuery<'_>) -> Vec<Suggestion> {
        match query {
            SuggestQuery::Name(partial) => self.by_name(partial),
            SuggestQuery::Account(partial) => self.by_account(partial),
        }
    }

    fn by_name(&self, partial: &str) -> Vec<Suggestion> {
        let partial = partial.trim().to_lowercase();
        if partial.is_empty() {
            return Vec::new();
        }
        self.latest
            .iter()
            .filter(|r| r.person_name.to_lowercase().contains(&partial))
            .take(self.limit)
            .map(|r| suggestion(r))
            .collect()
    }

    fn by_account(&self, partial: &str) -> Vec<Suggestion> {
        let partial = digits_only(partial);
        if partial.is_empty() {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();
        for r in self.latest.iter().copied() {
            if suggestions.len() >= self.limit {
                break;
            }
            if r.account_digits().contains(&partial) && seen.insert(r.bank_account.as_str()) {
                suggestions.push(suggestion(r));
            }
        }
        suggestions
    }
}

fn suggestion(record: &ParkingRecord) -> Suggestion {
    Suggestion {
        person_name: record.person_name.clone(),
        position: record.position,
        bank_account: record.bank_account.clone(),
    }
}

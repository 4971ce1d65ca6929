use std::collections::{BTreeMap, HashMap};

use crate::entities::{
    Aggregation, AggregatorSettings, GroupKey, GroupTotal, LocationCount, ParkingLocation,
    ParkingRecord, RecordFilters, TopLocations,
};

use super::{korean_collation, utils::effective_timestamp};

pub(crate) struct Aggregator<'a> {
    settings: &'a AggregatorSettings,
}

impl<'a> Aggregator<'a> {
    pub(crate) fn new(settings: &'a AggregatorSettings) -> Self {
        Self { settings }
    }

    pub(crate) fn aggregate(
        &self,
        records: &[ParkingRecord],
        filters: &RecordFilters,
    ) -> Aggregation {
        let name_filter = filters.active_name().map(str::to_lowercase);

        let mut filtered: Vec<(ParkingRecord, chrono::NaiveDateTime)> = records
            .iter()
            .map(|r| (r, effective_timestamp(r, self.settings)))
            .filter(|(r, ts)| {
                name_filter.as_deref().map_or(true, |n| matches_name(r, n))
                    && filters.range.contains(*ts)
                    && filters.location.matches(r.location)
            })
            .map(|(r, ts)| (r.clone(), ts))
            .collect();

        // Stable: equal names and timestamps keep their input order.
        filtered.sort_by(|(a, a_ts), (b, b_ts)| {
            korean_collation::compare(&a.person_name, &b.person_name).then_with(|| b_ts.cmp(a_ts))
        });
        let records: Vec<ParkingRecord> = filtered.into_iter().map(|(r, _)| r).collect();

        let totals = group_totals(&records);
        let top_fee_payers = top_fee_payers(&totals, self.settings.top_payer_count);
        let grouped_totals: BTreeMap<GroupKey, GroupTotal> = totals
            .into_iter()
            .map(|t| {
                let key = GroupKey {
                    name: t.name.clone(),
                    bank_account: t.bank_account.clone(),
                };
                (key, t)
            })
            .collect();
        // Map order: must equal a sum over `grouped_totals.values()`.
        let total_fee: f64 = grouped_totals.values().map(|t| t.total_fee).sum();

        let period_top_location = top_locations(&records, self.settings.top_location_count);
        let individual_top_location = name_filter.as_deref().map(|n| {
            top_locations(
                records.iter().filter(|r| matches_name(r, n)),
                self.settings.top_location_count,
            )
        });

        Aggregation {
            records,
            total_fee,
            grouped_totals,
            period_top_location,
            individual_top_location,
            top_fee_payers,
        }
    }
}

/// Case-insensitive substring match; `needle` is already lowercased.
fn matches_name(record: &ParkingRecord, needle: &str) -> bool {
    record.person_name.to_lowercase().contains(needle)
}

/// Per (name, account) totals, in order of first appearance.
fn group_totals(records: &[ParkingRecord]) -> Vec<GroupTotal> {
    let (totals, _) = records.iter().fold(
        (Vec::<GroupTotal>::new(), HashMap::<GroupKey, usize>::new()),
        |(mut totals, mut index), r| {
            let key = GroupKey {
                name: r.person_name.clone(),
                bank_account: r.bank_account.clone(),
            };
            let i = *index.entry(key).or_insert_with(|| {
                totals.push(GroupTotal {
                    name: r.person_name.clone(),
                    bank_account: r.bank_account.clone(),
                    total_fee: 0.0,
                });
                totals.len() - 1
            });
            totals[i].total_fee += r.fee_or_zero();
            (totals, index)
        },
    );
    totals
}

/// Location usage counts, most frequent first. Ties keep first-seen order.
pub(crate) fn top_locations<'r>(
    records: impl IntoIterator<Item = &'r ParkingRecord>,
    count: usize,
) -> TopLocations {
    let mut counts: Vec<LocationCount> = Vec::new();
    let mut index: HashMap<ParkingLocation, usize> = HashMap::new();
    for r in records {
        match index.get(&r.location) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(r.location, counts.len());
                counts.push(LocationCount {
                    location: r.location,
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(count);
    TopLocations(counts)
}

fn top_fee_payers(totals: &[GroupTotal], count: usize) -> Vec<GroupTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total_fee.total_cmp(&a.total_fee));
    ranked.truncate(count);
    ranked
}

impl Aggregation {
    /// Group totals by name (Korean collation), then account.
    pub fn sorted_group_totals(&self) -> Vec<&GroupTotal> {
        let mut totals: Vec<&GroupTotal> = self.grouped_totals.values().collect();
        totals.sort_by(|a, b| {
            korean_collation::compare(&a.name, &b.name)
                .then_with(|| korean_collation::compare(&a.bank_account, &b.bank_account))
        });
        totals
    }
}

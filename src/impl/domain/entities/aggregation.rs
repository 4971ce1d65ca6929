use std::{collections::BTreeMap, fmt};

use serde_derive::Serialize;

use super::parking_record::{ParkingLocation, ParkingRecord};

/// Records sharing a person and a payout account are totalled together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub name: String,
    pub bank_account: String,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.name, self.bank_account)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub name: String,
    pub bank_account: String,
    pub total_fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: ParkingLocation,
    pub count: usize,
}

/// Most used locations, most frequent first. Empty when there was no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopLocations(pub Vec<LocationCount>);

impl TopLocations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Aggregation {
    /// Filtered records, by name (Korean collation) then newest first.
    pub records: Vec<ParkingRecord>,
    pub total_fee: f64,
    #[serde(serialize_with = "serialize_grouped_totals")]
    pub grouped_totals: BTreeMap<GroupKey, GroupTotal>,
    pub period_top_location: TopLocations,
    /// Only computed when a name filter is active.
    pub individual_top_location: Option<TopLocations>,
    /// Highest totals first.
    pub top_fee_payers: Vec<GroupTotal>,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Serializes with "name | account" keys.
fn serialize_grouped_totals<S>(
    totals: &BTreeMap<GroupKey, GroupTotal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(totals.iter().map(|(k, v)| (k.to_string(), v)))
}

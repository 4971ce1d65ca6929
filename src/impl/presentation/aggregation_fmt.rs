use crate::entities::{Aggregation, GroupTotal, LocationCount, TopLocations};

use super::utils::format_won;

/// Label shown when a statistic has no records to work from.
pub const NO_DATA_LABEL: &str = "데이터 없음";

impl LocationCount {
    /// "<location> (<count>건)"
    pub fn label(&self) -> String {
        format!("{} ({}건)", self.location, self.count)
    }
}

impl TopLocations {
    pub fn label(&self) -> String {
        if self.is_empty() {
            return NO_DATA_LABEL.to_string();
        }
        self.0
            .iter()
            .map(LocationCount::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl GroupTotal {
    /// "<name> (<amount>원)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, format_won(self.total_fee))
    }
}

impl Aggregation {
    pub fn total_fee_label(&self) -> String {
        format_won(self.total_fee)
    }

    pub fn period_top_location_label(&self) -> String {
        self.period_top_location.label()
    }

    /// No-data label as well when no name filter was active.
    pub fn individual_top_location_label(&self) -> String {
        self.individual_top_location
            .as_ref()
            .map_or_else(|| NO_DATA_LABEL.to_string(), TopLocations::label)
    }

    pub fn top_fee_payers_label(&self) -> String {
        if self.top_fee_payers.is_empty() {
            return NO_DATA_LABEL.to_string();
        }
        self.top_fee_payers
            .iter()
            .map(GroupTotal::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::entities::ParkingLocation;

    use super::*;

    fn empty_aggregation() -> Aggregation {
        Aggregation {
            records: Vec::new(),
            total_fee: 0.0,
            grouped_totals: BTreeMap::new(),
            period_top_location: TopLocations::default(),
            individual_top_location: None,
            top_fee_payers: Vec::new(),
        }
    }

    #[test]
    fn empty_statistics_use_no_data_label() {
        let agg = empty_aggregation();
        assert_eq!(agg.period_top_location_label(), "데이터 없음");
        assert_eq!(agg.individual_top_location_label(), "데이터 없음");
        assert_eq!(agg.top_fee_payers_label(), "데이터 없음");
        assert_eq!(agg.total_fee_label(), "0원");
    }

    #[test]
    fn location_and_payer_labels() {
        let top = TopLocations(vec![
            LocationCount {
                location: ParkingLocation::KookminBank,
                count: 2,
            },
            LocationCount {
                location: ParkingLocation::GwangjinSquarePublic,
                count: 1,
            },
        ]);
        assert_eq!(top.label(), "국민은행 주차장 (2건), 광진광장 공영주차장 (1건)");

        let payer = GroupTotal {
            name: "김철수".into(),
            bank_account: "국민/1".into(),
            total_fee: 9000.0,
        };
        assert_eq!(payer.label(), "김철수 (9,000원)");
    }
}

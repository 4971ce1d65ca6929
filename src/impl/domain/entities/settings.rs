use chrono::{FixedOffset, Offset as _, Utc};
use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::errors::InvalidRon;

/// Which field places a record in time for sorting and range filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimestampBasis {
    /// Store creation time, falling back to the parking date for records that
    /// have none.
    #[default]
    CreatedAtThenDate,
    /// Always the user-entered parking date.
    ParkingDate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AggregatorSettings {
    /// Offset of the local calendar that bare dates refer to (KST by default).
    pub utc_offset_seconds: i32,
    pub timestamp_basis: TimestampBasis,
    pub top_location_count: usize,
    pub top_payer_count: usize,
    pub suggestion_limit: usize,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            utc_offset_seconds: 9 * 3600,
            timestamp_basis: TimestampBasis::default(),
            top_location_count: 1,
            top_payer_count: 3,
            suggestion_limit: 5,
        }
    }
}

impl AggregatorSettings {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("AggregatorSettings", &e))
    }

    pub(crate) fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds)
            .unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = AggregatorSettings::from_ron_str("(top_payer_count: 5)").unwrap();
        assert_eq!(settings.top_payer_count, 5);
        assert_eq!(settings.top_location_count, 1);
        assert_eq!(settings.suggestion_limit, 5);
        assert_eq!(settings.utc_offset_seconds, 32400);
        assert_eq!(settings.timestamp_basis, TimestampBasis::CreatedAtThenDate);
    }

    #[test]
    fn parses_timestamp_basis() {
        let settings = AggregatorSettings::from_ron_str(
            "(utc_offset_seconds: 0, timestamp_basis: ParkingDate)",
        )
        .unwrap();
        assert_eq!(settings.timestamp_basis, TimestampBasis::ParkingDate);
        assert_eq!(settings.offset().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(AggregatorSettings::from_ron_str("(top_payer_count: \"three\")").is_err());
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let settings = AggregatorSettings {
            utc_offset_seconds: 100_000,
            ..Default::default()
        };
        assert_eq!(settings.offset().local_minus_utc(), 0);
    }
}

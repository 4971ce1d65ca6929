use chrono::{NaiveDateTime, NaiveTime};

use crate::entities::{AggregatorSettings, ParkingRecord, TimestampBasis};

/// Moment a record is placed at for sorting and range filtering, expressed in
/// the configured local calendar.
pub(crate) fn effective_timestamp(
    record: &ParkingRecord,
    settings: &AggregatorSettings,
) -> NaiveDateTime {
    let parking_day = || record.date.and_time(NaiveTime::MIN);
    match settings.timestamp_basis {
        TimestampBasis::CreatedAtThenDate => record
            .created_at
            .map(|t| t.with_timezone(&settings.offset()).naive_local())
            .unwrap_or_else(parking_day),
        TimestampBasis::ParkingDate => parking_day(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _, Utc};

    use crate::entities::{ParkingLocation, Position, RecordId};

    use super::*;

    fn record(created_at: Option<chrono::DateTime<Utc>>) -> ParkingRecord {
        ParkingRecord {
            id: RecordId("r1".into()),
            location: ParkingLocation::KookminBank,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            person_name: "김철수".into(),
            position: Position::Member,
            bank_account: "국민/123".into(),
            duration_hours: 2.0,
            is_custom_duration: false,
            hourly_rate: 3000.0,
            fee: Some(6000.0),
            created_at,
        }
    }

    #[test]
    fn created_at_is_shifted_into_local_calendar() {
        // 2024-03-10 20:30 UTC is 2024-03-11 05:30 KST.
        let r = record(Some(Utc.with_ymd_and_hms(2024, 3, 10, 20, 30, 0).unwrap()));
        let ts = effective_timestamp(&r, &AggregatorSettings::default());
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 11)
                .unwrap()
                .and_hms_opt(5, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn falls_back_to_parking_date() {
        let ts = effective_timestamp(&record(None), &AggregatorSettings::default());
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn parking_date_basis_ignores_created_at() {
        let r = record(Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()));
        let settings = AggregatorSettings {
            timestamp_basis: TimestampBasis::ParkingDate,
            ..Default::default()
        };
        assert_eq!(
            effective_timestamp(&r, &settings).date(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }
}

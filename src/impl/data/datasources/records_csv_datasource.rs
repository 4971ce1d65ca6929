use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use log::debug;

use crate::{
    data::models::{
        amount_model::AmountModel, iso_date_model::ISODateModel, timestamp_model::TimestampModel,
    },
    entities::{ParkingLocation, ParkingRecord, Position, RecordId},
    errors::{InvalidCsv, InvalidFlag, ReadError},
};

/// Reads record snapshots laid out as
/// `id,location,date,name,position,account_info,duration_hours,hourly_rate,fee,created_at[,is_custom_duration]`.
/// The trailing flag column may be absent or empty, meaning a preset duration.
#[async_trait]
pub(crate) trait RecordsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<ParkingRecord>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<ParkingRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct RecordsCsvDatasourceImpl;

impl RecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordsCsvDatasource for RecordsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ParkingRecord>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_location = r.get(1).unwrap_or("");
                    let raw_date = r.get(2).unwrap_or("");
                    let raw_name = r.get(3).unwrap_or("");
                    let raw_position = r.get(4).unwrap_or("");
                    let raw_account_info = r.get(5).unwrap_or("");
                    let raw_duration = r.get(6).unwrap_or("0");
                    let raw_hourly_rate = r.get(7).unwrap_or("0");
                    let raw_fee = optional(r.get(8));
                    let raw_created_at = optional(r.get(9));
                    let raw_is_custom = optional(r.get(10));

                    // Parse.
                    let location = ParkingLocation::from_str(raw_location)?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;
                    let position = Position::from_str(raw_position)?;
                    let duration: AmountModel = AmountModel::from_str(raw_duration)?;
                    let hourly_rate: AmountModel = AmountModel::from_str(raw_hourly_rate)?;
                    let fee: Option<AmountModel> =
                        raw_fee.map(AmountModel::from_str).transpose()?;
                    let created_at: Option<TimestampModel> =
                        raw_created_at.map(TimestampModel::from_str).transpose()?;
                    let is_custom_duration = raw_is_custom.map(parse_flag).transpose()?;

                    // Build.
                    Ok(ParkingRecord {
                        id: RecordId(if raw_id.is_empty() {
                            format!("row-{}", i + 1)
                        } else {
                            raw_id.to_string()
                        }),
                        location,
                        date: date.into(),
                        person_name: raw_name.trim().to_string(),
                        position,
                        bank_account: raw_account_info.trim().to_string(),
                        duration_hours: duration.into(),
                        is_custom_duration: is_custom_duration.unwrap_or(false),
                        hourly_rate: hourly_rate.into(),
                        fee: fee.map(Into::into),
                        created_at: created_at.map(Into::into),
                    })
                })
            })
            .collect::<Result<Vec<_>, ServerError>>()
            .map(|records| {
                debug!("Parsed {} parking records from CSV.", records.len());
                records
            })
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<ParkingRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}

fn optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_flag(raw: &str) -> Result<bool, ServerError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(InvalidFlag::new(raw)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _, Utc};

    use super::*;

    const HEADER: &str =
        "id,location,date,name,position,account_info,duration_hours,hourly_rate,fee,created_at\n";

    #[test]
    fn parses_rows() {
        let csv = format!(
            "{HEADER}\
             a1,국민은행 주차장,2024-01-07,김철수,집사,국민/123-45,4,\"3,000\",\"12,000\",2024-01-07T02:00:00Z\n\
             ,광진광장 공영주차장,2024-01-14,이영희,권사,우리/999,2,3000,,\n"
        );
        let records = RecordsCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id, RecordId("a1".into()));
        assert_eq!(first.location, ParkingLocation::KookminBank);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_eq!(first.position, Position::Deacon);
        assert_eq!(first.bank_account, "국민/123-45");
        assert_eq!(first.hourly_rate, 3000.0);
        assert_eq!(first.fee, Some(12000.0));
        assert_eq!(
            first.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 7, 2, 0, 0).unwrap())
        );

        let second = &records[1];
        assert_eq!(second.id, RecordId("row-2".into()));
        assert_eq!(second.fee, None);
        assert_eq!(second.created_at, None);
        assert_eq!(second.fee_or_zero(), 0.0);
    }

    #[test]
    fn reads_custom_duration_flag() {
        let csv = "id,location,date,name,position,account_info,duration_hours,hourly_rate,fee,created_at,is_custom_duration\n\
             a1,국민은행 주차장,2024-01-07,김철수,집사,국민/1,1.5,3000,4500,,true\n\
             a2,국민은행 주차장,2024-01-07,김철수,집사,국민/1,4,3000,12000,,FALSE\n\
             a3,국민은행 주차장,2024-01-07,김철수,집사,국민/1,4,3000,12000,,\n";
        let records = RecordsCsvDatasourceImpl::new().from_string(csv).unwrap();
        let flags: Vec<bool> = records.iter().map(|r| r.is_custom_duration).collect();
        assert_eq!(flags, vec![true, false, false]);
        assert_eq!(records[0].duration_hours, 1.5);

        let bad = csv.replace(",true", ",maybe");
        assert!(RecordsCsvDatasourceImpl::new().from_string(&bad).is_err());
    }

    #[test]
    fn rejects_unknown_location() {
        let csv = format!("{HEADER}a1,어딘가,2024-01-07,김철수,집사,국민/1,4,3000,12000,\n");
        assert!(RecordsCsvDatasourceImpl::new().from_string(&csv).is_err());
    }

    #[test]
    fn rejects_bad_date() {
        let csv = format!("{HEADER}a1,국민은행 주차장,07/01/2024,김철수,집사,국민/1,4,3000,12000,\n");
        assert!(RecordsCsvDatasourceImpl::new().from_string(&csv).is_err());
    }

    #[test]
    fn header_only_is_empty() {
        let records = RecordsCsvDatasourceImpl::new().from_string(HEADER).unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let result = RecordsCsvDatasourceImpl::new()
            .from_file("/nonexistent/parking.csv")
            .await;
        assert!(result.is_err());
    }
}

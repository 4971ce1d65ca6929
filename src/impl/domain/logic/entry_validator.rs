use fractic_server_error::ServerError;

use crate::{
    entities::{
        BankName, NewParkingRecord, ParkingDuration, ValidatedParkingRecord,
        DEFAULT_HOURLY_RATE, MAX_PRESET_HOURS,
    },
    errors::{
        InvalidDuration, InvalidHourlyRate, MissingAccountNumber, MissingBankName,
        MissingPersonName,
    },
};

pub(crate) struct EntryValidator {
    entry: NewParkingRecord,
}

impl EntryValidator {
    pub(crate) fn new(entry: NewParkingRecord) -> Self {
        Self { entry }
    }

    pub(crate) fn process(self) -> Result<ValidatedParkingRecord, ServerError> {
        let NewParkingRecord {
            location,
            date,
            person_name,
            position,
            bank,
            account_number,
            duration,
            hourly_rate,
        } = self.entry;

        let person_name = person_name.trim().to_string();
        if person_name.is_empty() {
            return Err(MissingPersonName::new());
        }

        let duration_hours = duration.hours();
        let valid_duration = match duration {
            ParkingDuration::Preset(h) => (1..=MAX_PRESET_HOURS).contains(&h),
            ParkingDuration::Custom(h) => h.is_finite() && h > 0.0,
        };
        if !valid_duration {
            return Err(InvalidDuration::new(duration_hours));
        }

        // An empty or zero rate field means "use the standard rate".
        let hourly_rate = match hourly_rate {
            None => DEFAULT_HOURLY_RATE,
            Some(r) if r == 0.0 => DEFAULT_HOURLY_RATE,
            Some(r) if r.is_finite() && r > 0.0 => r,
            Some(r) => return Err(InvalidHourlyRate::new(r)),
        };

        let bank_name = match &bank {
            BankName::Other(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(MissingBankName::new());
                }
                name.to_string()
            }
            known => known.name().to_string(),
        };

        let account_number = account_number.trim().replace('-', "");
        if account_number.is_empty() {
            return Err(MissingAccountNumber::new());
        }

        Ok(ValidatedParkingRecord {
            location,
            date,
            person_name,
            position,
            bank_account: format!("{}/{}", bank_name, account_number),
            duration_hours,
            is_custom_duration: duration.is_custom(),
            hourly_rate,
            fee: duration_hours * hourly_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::{ParkingLocation, Position};

    use super::*;

    fn entry() -> NewParkingRecord {
        NewParkingRecord {
            location: ParkingLocation::SejongDaeyangAiCenter,
            date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            person_name: "  김철수 ".into(),
            position: Position::Deacon,
            bank: BankName::KakaoBank,
            account_number: "3333-01-1234567".into(),
            duration: ParkingDuration::default(),
            hourly_rate: None,
        }
    }

    #[test]
    fn computes_fee_with_default_rate() {
        let record = EntryValidator::new(entry()).process().unwrap();
        assert_eq!(record.person_name, "김철수");
        assert_eq!(record.bank_account, "카카오뱅크/3333011234567");
        assert_eq!(record.duration_hours, 4.0);
        assert_eq!(record.hourly_rate, 3000.0);
        assert_eq!(record.fee, 12000.0);
        assert!(!record.is_custom_duration);
    }

    #[test]
    fn custom_duration_and_rate() {
        let record = EntryValidator::new(NewParkingRecord {
            duration: ParkingDuration::Custom(1.5),
            hourly_rate: Some(2000.0),
            ..entry()
        })
        .process()
        .unwrap();
        assert_eq!(record.fee, 3000.0);
        assert!(record.is_custom_duration);
    }

    #[test]
    fn zero_rate_falls_back_to_default() {
        let record = EntryValidator::new(NewParkingRecord {
            hourly_rate: Some(0.0),
            ..entry()
        })
        .process()
        .unwrap();
        assert_eq!(record.hourly_rate, DEFAULT_HOURLY_RATE);
    }

    #[test]
    fn other_bank_uses_typed_name() {
        let record = EntryValidator::new(NewParkingRecord {
            bank: BankName::Other(" 새마을금고 ".into()),
            ..entry()
        })
        .process()
        .unwrap();
        assert_eq!(record.bank_account, "새마을금고/3333011234567");
    }

    #[test]
    fn rejects_invalid_entries() {
        let cases = vec![
            NewParkingRecord {
                person_name: "   ".into(),
                ..entry()
            },
            NewParkingRecord {
                duration: ParkingDuration::Custom(0.0),
                ..entry()
            },
            NewParkingRecord {
                duration: ParkingDuration::Preset(13),
                ..entry()
            },
            NewParkingRecord {
                hourly_rate: Some(-100.0),
                ..entry()
            },
            NewParkingRecord {
                bank: BankName::Other("  ".into()),
                ..entry()
            },
            NewParkingRecord {
                account_number: " - ".into(),
                ..entry()
            },
        ];
        for case in cases {
            assert!(EntryValidator::new(case).process().is_err());
        }
    }
}

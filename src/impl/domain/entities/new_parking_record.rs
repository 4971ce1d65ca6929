use std::fmt;

use chrono::NaiveDate;

use crate::domain::logic::korean_collation;

use super::parking_record::{ParkingLocation, Position};

pub const DEFAULT_HOURLY_RATE: f64 = 3000.0;
pub const DEFAULT_PRESET_HOURS: u8 = 4;
pub const MAX_PRESET_HOURS: u8 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BankName {
    Woori,
    Ibk,
    Kdb,
    Kookmin,
    Nonghyup,
    Hana,
    Shinhan,
    Citi,
    TossBank,
    KBank,
    KakaoBank,
    Suhyup,
    Keb,
    StandardChartered,
    /// 기타: free-entry bank name.
    Other(String),
}

impl BankName {
    pub const KNOWN: [BankName; 14] = [
        BankName::Woori,
        BankName::Ibk,
        BankName::Kdb,
        BankName::Kookmin,
        BankName::Nonghyup,
        BankName::Hana,
        BankName::Shinhan,
        BankName::Citi,
        BankName::TossBank,
        BankName::KBank,
        BankName::KakaoBank,
        BankName::Suhyup,
        BankName::Keb,
        BankName::StandardChartered,
    ];

    pub const OTHER_LABEL: &'static str = "기타";

    pub fn name(&self) -> &str {
        match self {
            BankName::Other(name) => name,
            known => known_name(known),
        }
    }

    /// Maps a stored bank name back to a known bank, falling back to `Other`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        BankName::KNOWN
            .into_iter()
            .find(|b| b.name() == name)
            .unwrap_or_else(|| BankName::Other(name.to_string()))
    }

    /// Selector labels: known banks in Korean collation order, then 기타.
    pub fn choices() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = BankName::KNOWN.iter().map(known_name).collect();
        names.sort_by(|a, b| korean_collation::compare(a, b));
        names.push(BankName::OTHER_LABEL);
        names
    }
}

fn known_name(bank: &BankName) -> &'static str {
    match bank {
        BankName::Woori => "우리",
        BankName::Ibk => "기업",
        BankName::Kdb => "산업",
        BankName::Kookmin => "국민",
        BankName::Nonghyup => "농협",
        BankName::Hana => "하나",
        BankName::Shinhan => "신한",
        BankName::Citi => "한국씨티",
        BankName::TossBank => "토스뱅크",
        BankName::KBank => "케이뱅크",
        BankName::KakaoBank => "카카오뱅크",
        BankName::Suhyup => "수협",
        BankName::Keb => "외환",
        BankName::StandardChartered => "SC제일",
        BankName::Other(_) => BankName::OTHER_LABEL,
    }
}

impl fmt::Display for BankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParkingDuration {
    /// Whole hours picked from the 1..=12 selector.
    Preset(u8),
    Custom(f64),
}

impl Default for ParkingDuration {
    fn default() -> Self {
        ParkingDuration::Preset(DEFAULT_PRESET_HOURS)
    }
}

impl ParkingDuration {
    pub fn hours(&self) -> f64 {
        match self {
            ParkingDuration::Preset(h) => *h as f64,
            ParkingDuration::Custom(h) => *h,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ParkingDuration::Custom(_))
    }
}

/// A submitted entry, before validation.
#[derive(Debug, Clone)]
pub struct NewParkingRecord {
    pub location: ParkingLocation,
    pub date: NaiveDate,
    pub person_name: String,
    pub position: Position,
    pub bank: BankName,
    pub account_number: String,
    pub duration: ParkingDuration,
    /// `None` (or zero) falls back to [`DEFAULT_HOURLY_RATE`].
    pub hourly_rate: Option<f64>,
}

/// Entry that passed validation and only lacks the store-assigned id and
/// creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedParkingRecord {
    pub location: ParkingLocation,
    pub date: NaiveDate,
    pub person_name: String,
    pub position: Position,
    pub bank_account: String,
    pub duration_hours: f64,
    pub is_custom_duration: bool,
    pub hourly_rate: f64,
    pub fee: f64,
}

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use fractic_server_error::ServerError;
use serde_derive::{Deserialize, Serialize};

use crate::errors::{UnknownParkingLocation, UnknownPosition};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParkingLocation {
    ChildrensHallLot1,
    ChildrensHallLot2,
    SejongDaeyangAiCenter,
    KookminBank,
    SejongBehindChurch,
    GwangjinSquarePublic,
}

impl ParkingLocation {
    pub const ALL: [ParkingLocation; 6] = [
        ParkingLocation::ChildrensHallLot1,
        ParkingLocation::ChildrensHallLot2,
        ParkingLocation::SejongDaeyangAiCenter,
        ParkingLocation::KookminBank,
        ParkingLocation::SejongBehindChurch,
        ParkingLocation::GwangjinSquarePublic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParkingLocation::ChildrensHallLot1 => "어린이회관 주차장1",
            ParkingLocation::ChildrensHallLot2 => "어린이회관 주차장2",
            ParkingLocation::SejongDaeyangAiCenter => "세종대 대양AI센터 주차장",
            ParkingLocation::KookminBank => "국민은행 주차장",
            ParkingLocation::SejongBehindChurch => "교회 뒷편 세종대 주차장",
            ParkingLocation::GwangjinSquarePublic => "광진광장 공영주차장",
        }
    }
}

impl fmt::Display for ParkingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParkingLocation {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ParkingLocation::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| UnknownParkingLocation::new(s))
    }
}

/// Church office held by the person requesting reimbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    YoungAdult,
    Member,
    Deacon,
    Kwonsa,
    Elder,
    Pastor,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::YoungAdult,
        Position::Member,
        Position::Deacon,
        Position::Kwonsa,
        Position::Elder,
        Position::Pastor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Position::YoungAdult => "청년",
            Position::Member => "성도",
            Position::Deacon => "집사",
            Position::Kwonsa => "권사",
            Position::Elder => "장로",
            Position::Pastor => "목사",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPosition::new(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingRecord {
    pub id: RecordId,
    pub location: ParkingLocation,
    pub date: NaiveDate,
    pub person_name: String,
    pub position: Position,
    /// "<bank name>/<account number>".
    pub bank_account: String,
    pub duration_hours: f64,
    pub is_custom_duration: bool,
    pub hourly_rate: f64,
    /// Stored at creation, never recomputed. Missing on some imported rows.
    pub fee: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ParkingRecord {
    pub fn fee_or_zero(&self) -> f64 {
        self.fee.unwrap_or(0.0)
    }

    /// Account number portion of `bank_account`, digits only.
    pub fn account_digits(&self) -> String {
        self.bank_account
            .split_once('/')
            .map(|(_, account)| digits_only(account))
            .unwrap_or_default()
    }
}

pub(crate) fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fractic_server_error::ServerError;

use super::parking_record::ParkingLocation;

/// Criteria for narrowing a record set. All criteria are optional and
/// combined with AND.
#[derive(Debug, Clone, Default)]
pub struct RecordFilters {
    /// Case-insensitive substring of the person's name.
    pub name: Option<String>,
    pub range: DateRange,
    pub location: LocationFilter,
}

impl RecordFilters {
    /// The name filter, trimmed. Blank filters count as absent.
    pub fn active_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Inclusive range over effective timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<DateBound>,
    pub end: Option<DateBound>,
}

impl DateRange {
    pub fn days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(DateBound::Day(start)),
            end: Some(DateBound::Day(end)),
        }
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start.map_or(true, |s| ts >= s.as_start())
            && self.end.map_or(true, |e| ts <= e.as_end())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateBound {
    /// Bare date, widened to cover the whole day.
    Day(NaiveDate),
    At(NaiveDateTime),
}

impl DateBound {
    pub fn as_start(&self) -> NaiveDateTime {
        match self {
            DateBound::Day(d) => d.and_time(NaiveTime::MIN),
            DateBound::At(t) => *t,
        }
    }

    pub fn as_end(&self) -> NaiveDateTime {
        match self {
            DateBound::Day(d) => d.and_time(end_of_day()),
            DateBound::At(t) => *t,
        }
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("hardcoded time should be valid")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Only(ParkingLocation),
}

impl LocationFilter {
    /// Selector value standing for "every location".
    pub const ALL_SENTINEL: &'static str = "ALL_PARKING_LOCATIONS";

    pub fn matches(&self, location: ParkingLocation) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(l) => *l == location,
        }
    }
}

impl FromStr for LocationFilter {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == Self::ALL_SENTINEL {
            return Ok(LocationFilter::All);
        }
        Ok(LocationFilter::Only(ParkingLocation::from_str(s)?))
    }
}

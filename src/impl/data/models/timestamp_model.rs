use std::str::FromStr;

use chrono::{DateTime, Utc};
use fractic_server_error::ServerError;

use crate::errors::InvalidTimestamp;

/// RFC 3339 timestamp as written by the store (ex. "2024-01-02T09:30:00Z").
#[derive(Debug)]
pub(crate) struct TimestampModel(DateTime<Utc>);
impl FromStr for TimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|e| InvalidTimestamp::with_debug(s, &e))?;
        Ok(TimestampModel(t.with_timezone(&Utc)))
    }
}

impl Into<DateTime<Utc>> for TimestampModel {
    fn into(self) -> DateTime<Utc> {
        self.0
    }
}

use serde_derive::Serialize;

use super::parking_record::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestQuery<'a> {
    /// Partial name as typed.
    Name(&'a str),
    /// Partial account number as typed; anything but digits is ignored.
    Account(&'a str),
}

/// Autocomplete candidate, prefilled from the person's latest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub person_name: String,
    pub position: Position,
    pub bank_account: String,
}

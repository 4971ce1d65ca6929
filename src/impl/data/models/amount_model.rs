use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Plain decimal amount, optionally with thousands separators and a trailing
/// "원" (ex. "3,000원").
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let numeric_part = raw.trim().trim_end_matches('원').trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        if !amount.is_finite() {
            return Err(InvalidAmount::new(s));
        }
        Ok(AmountModel(amount))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formatted_amounts() {
        assert_eq!(AmountModel::from_str("3,000").unwrap().0, 3000.0);
        assert_eq!(AmountModel::from_str(" 12,000원 ").unwrap().0, 12000.0);
        assert_eq!(AmountModel::from_str("1.5").unwrap().0, 1.5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(AmountModel::from_str("abc").is_err());
        assert!(AmountModel::from_str("").is_err());
        assert!(AmountModel::from_str("inf").is_err());
    }
}

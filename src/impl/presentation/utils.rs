use num_format::{Locale, ToFormattedString as _};

/// At most this many fractional digits are shown; trailing zeros are dropped.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a won amount with Korean thousands separators (ex. 12,000원,
/// 3,300.5원).
pub(crate) fn format_won(amount: f64) -> String {
    let scale = 10_i64.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as i64;
    let integer_part = (scaled / scale).to_formatted_string(&Locale::ko);
    let fractional_part = format!(
        "{:0width$}",
        scaled % scale,
        width = MAX_FRACTION_DIGITS as usize
    );
    let fractional_part = fractional_part.trim_end_matches('0');
    format!(
        "{}{}{}{}원",
        if amount < 0.0 && scaled != 0 { "-" } else { "" },
        integer_part,
        if fractional_part.is_empty() { "" } else { "." },
        fractional_part,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_won() {
        assert_eq!(format_won(12000.0), "12,000원");
        assert_eq!(format_won(1234567.0), "1,234,567원");
        assert_eq!(format_won(0.0), "0원");
    }

    #[test]
    fn keeps_fractional_won() {
        assert_eq!(format_won(3300.5), "3,300.5원");
        assert_eq!(format_won(1.1 * 3000.0), "3,300원");
        assert_eq!(format_won(0.12345), "0.123원");
        assert_eq!(format_won(-1500.25), "-1,500.25원");
        assert_eq!(format_won(-0.0001), "0원");
    }
}

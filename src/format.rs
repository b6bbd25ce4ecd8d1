//! Display formatting helpers (XPF currency, phone numbers)

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format an amount as Pacific francs: whole units, space-grouped
/// thousands, `XPF` suffix. The currency has no subdivision, so any
/// fractional part is rounded away at display time.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round().to_i64().unwrap_or(0);
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    let first = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} XPF", grouped)
    } else {
        format!("{} XPF", grouped)
    }
}

/// Format a Polynesian phone number as dotted pairs (ex: 87.77.77.77)
pub fn format_phone_number(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.len() == 8 {
        cleaned
            .as_bytes()
            .chunks(2)
            .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(".")
    } else {
        phone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "0 XPF");
        assert_eq!(format_currency(dec!(950)), "950 XPF");
        assert_eq!(format_currency(dec!(45000)), "45 000 XPF");
        assert_eq!(format_currency(dec!(1234567)), "1 234 567 XPF");
    }

    #[test]
    fn currency_drops_fractions() {
        assert_eq!(format_currency(dec!(49500.4)), "49 500 XPF");
    }

    #[test]
    fn phone_number_dotted() {
        assert_eq!(format_phone_number("87777777"), "87.77.77.77");
        assert_eq!(format_phone_number("87 77 77 77"), "87.77.77.77");
        assert_eq!(format_phone_number("+689 40 66 12 34"), "+689 40 66 12 34");
    }
}

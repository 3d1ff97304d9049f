//! Number formatting for reports: hours with two decimals, currency with
//! thousands separators.

/// "8.50"
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// "21,250.00" — two decimals, comma-grouped integer part.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(21250.0), "21,250.00");
        assert_eq!(format_currency(1234567.891), "1,234,567.89");
    }

    #[test]
    fn currency_small_values_have_no_separator() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.999), "1,000.00");
        assert_eq!(format_currency(500.5), "500.50");
    }

    #[test]
    fn currency_negative_keeps_sign_outside_groups() {
        assert_eq!(format_currency(-1250.0), "-1,250.00");
    }

    #[test]
    fn hours_round_to_two_decimals() {
        assert_eq!(format_hours(8.5), "8.50");
        assert_eq!(format_hours(0.333333), "0.33");
    }
}

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with thousands separators and two decimals.
///
/// `200000` renders as `200,000.00`. Rounding is half-to-even.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(dec!(200000)), "200,000.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(999)), "999.00");
        assert_eq!(format_amount(dec!(1000)), "1,000.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_half_even_rounding() {
        assert_eq!(format_amount(dec!(10.125)), "10.12");
        assert_eq!(format_amount(dec!(10.135)), "10.14");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_amount(dec!(-2500.5)), "-2,500.50");
    }
}

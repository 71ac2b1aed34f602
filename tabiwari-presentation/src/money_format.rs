//! Display formatting for money: `"JPY 3,000"`, at most one decimal place.
//! This is the only place amounts are ever rounded.

use rust_decimal::{Decimal, RoundingStrategy};
use tabiwari_domain::{CurrencyCode, Money};

/// `format_money(Money::from_i64(3000), &"JPY".into())` is `"JPY 3,000"`.
pub fn format_money(amount: Money, currency: &CurrencyCode) -> String {
    format!("{currency} {}", format_amount(amount))
}

/// Like [`format_money`] but with an explicit `+` on non-negative amounts,
/// for balance columns.
pub fn format_signed_money(amount: Money, currency: &CurrencyCode) -> String {
    let sign = if amount.as_decimal() >= Decimal::ZERO {
        "+"
    } else {
        ""
    };
    format!("{sign}{currency} {}", format_amount(amount))
}

fn format_amount(amount: Money) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.abs().to_string();
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + text.len() / 3);
    let digits = integer_part.len();
    for (idx, c) in integer_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match fraction_part {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

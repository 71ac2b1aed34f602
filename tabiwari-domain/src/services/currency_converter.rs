use crate::{
    model::{CurrencyCode, Money},
    rates::RateTable,
};

/// Pure conversion between currencies through the table's pivot.
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Converts `amount` from one currency to another.
    ///
    /// Computes `amount * rate(from) / rate(to)`; unknown codes convert at
    /// rate 1 (see [`RateTable::rate_or_default`]). Converting a currency to
    /// itself returns the amount unchanged, bit for bit. Signed and zero
    /// amounts pass straight through, which is what balance rendering needs.
    pub fn convert(
        amount: Money,
        from: &CurrencyCode,
        to: &CurrencyCode,
        rates: &RateTable,
    ) -> Money {
        if from == to {
            return amount;
        }
        let pivot_amount = amount.as_decimal() * rates.rate_or_default(from);
        Money::from_decimal(pivot_amount / rates.rate_or_default(to))
    }

    /// Converts `amount` into pivot-currency units.
    pub fn to_pivot(amount: Money, from: &CurrencyCode, rates: &RateTable) -> Money {
        Self::convert(amount, from, rates.pivot(), rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    #[fixture]
    fn rates() -> RateTable {
        let mut table = RateTable::new(CurrencyCode::new("JPY"));
        table
            .set(CurrencyCode::new("HKD"), Decimal::new(192, 1))
            .expect("valid rate");
        table
            .set(CurrencyCode::new("AUD"), Decimal::new(965, 1))
            .expect("valid rate");
        table
    }

    #[rstest]
    fn identity_conversion_is_exact(rates: RateTable) {
        let amount = Money::new(12345, 3);
        for code in ["JPY", "HKD", "XYZ"] {
            let code = CurrencyCode::new(code);
            assert_eq!(
                CurrencyConverter::convert(amount, &code, &code, &rates),
                amount
            );
        }
    }

    #[rstest]
    fn pivot_conversion_multiplies_by_rate(rates: RateTable) {
        let hkd = CurrencyCode::new("HKD");
        let converted = CurrencyConverter::to_pivot(Money::from_i64(100), &hkd, &rates);
        assert_eq!(converted, Money::from_i64(1920));
    }

    #[rstest]
    fn pivot_amount_renders_in_display_currency(rates: RateTable) {
        // 1500 JPY at 19.2 JPY/HKD is 78.125 HKD.
        let converted = CurrencyConverter::convert(
            Money::from_i64(1500),
            &CurrencyCode::new("JPY"),
            &CurrencyCode::new("HKD"),
            &rates,
        );
        assert_eq!(converted, Money::new(78125, 3));
    }

    #[rstest]
    fn unknown_currency_converts_at_rate_one(rates: RateTable) {
        let converted = CurrencyConverter::convert(
            Money::from_i64(500),
            &CurrencyCode::new("XYZ"),
            &CurrencyCode::new("JPY"),
            &rates,
        );
        assert_eq!(converted, Money::from_i64(500));
    }

    #[rstest]
    fn signed_amounts_keep_their_sign(rates: RateTable) {
        let converted = CurrencyConverter::convert(
            Money::from_i64(-1920),
            &CurrencyCode::new("JPY"),
            &CurrencyCode::new("HKD"),
            &rates,
        );
        assert_eq!(converted, Money::from_i64(-100));
        assert_eq!(
            CurrencyConverter::to_pivot(Money::ZERO, &CurrencyCode::new("HKD"), &rates),
            Money::ZERO
        );
    }

    #[rstest]
    fn round_trip_stays_within_epsilon(rates: RateTable) {
        let original = Money::new(12345, 2);
        let there = CurrencyConverter::convert(
            original,
            &CurrencyCode::new("AUD"),
            &CurrencyCode::new("HKD"),
            &rates,
        );
        let back = CurrencyConverter::convert(
            there,
            &CurrencyCode::new("HKD"),
            &CurrencyCode::new("AUD"),
            &rates,
        );
        let drift = (back - original).abs();
        assert!(drift.as_decimal() < Decimal::new(1, 6), "drift: {drift}");
    }
}

//! The exchange-rate table all conversions route through.
//!
//! Every rate is expressed against a single pivot currency: `rates[code]` is
//! how many pivot units one unit of `code` is worth. The pivot's own entry is
//! always exactly 1. Entry order is preserved so the table displays in the
//! order the user added currencies.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::CurrencyCode;

/// Rejected rate-table mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RateError {
    /// Rates must be strictly positive; a zero rate would divide by zero
    /// during conversion.
    NonPositiveRate { code: CurrencyCode, rate: Decimal },
    /// The pivot currency's rate is 1 by definition and cannot be changed.
    PivotRateNotUnit { rate: Decimal },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pivot: CurrencyCode,
    rates: IndexMap<CurrencyCode, Decimal>,
}

impl RateTable {
    pub fn new(pivot: CurrencyCode) -> Self {
        let mut rates = IndexMap::new();
        rates.insert(pivot.clone(), Decimal::ONE);
        Self { pivot, rates }
    }

    pub fn pivot(&self) -> &CurrencyCode {
        &self.pivot
    }

    /// Stores a rate, rejecting values that could not be converted through.
    ///
    /// This is the data-entry guard; [`RateTable::rate_or_default`] guards
    /// the lookup side as well, so a table deserialized from a tampered file
    /// still cannot divide by zero.
    pub fn set(&mut self, code: CurrencyCode, rate: Decimal) -> Result<(), RateError> {
        if code == self.pivot {
            return if rate == Decimal::ONE {
                Ok(())
            } else {
                Err(RateError::PivotRateNotUnit { rate })
            };
        }
        if rate <= Decimal::ZERO {
            return Err(RateError::NonPositiveRate { code, rate });
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    pub fn remove(&mut self, code: &CurrencyCode) -> Option<Decimal> {
        if code == &self.pivot {
            return None;
        }
        self.rates.shift_remove(code)
    }

    /// Pivot units per one unit of `code`.
    ///
    /// Unknown codes are treated as already pivot-valued (rate 1). That is a
    /// deliberate fallback, not an error: a freshly added currency converts
    /// 1:1 until a real rate arrives. Non-positive stored values fall back
    /// the same way.
    pub fn rate_or_default(&self, code: &CurrencyCode) -> Decimal {
        match self.rates.get(code) {
            Some(rate) if *rate > Decimal::ZERO => *rate,
            _ => Decimal::ONE,
        }
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> + '_ {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn jpy_table() -> RateTable {
        let mut table = RateTable::new(CurrencyCode::new("JPY"));
        table
            .set(CurrencyCode::new("HKD"), Decimal::new(192, 1))
            .expect("valid rate");
        table
    }

    #[test]
    fn pivot_rate_is_always_one() {
        let table = jpy_table();
        assert_eq!(table.rate_or_default(table.pivot()), Decimal::ONE);
    }

    #[test]
    fn pivot_rate_cannot_be_changed() {
        let mut table = jpy_table();
        assert_eq!(
            table.set(CurrencyCode::new("JPY"), Decimal::TWO),
            Err(RateError::PivotRateNotUnit { rate: Decimal::TWO })
        );
        assert!(table.set(CurrencyCode::new("JPY"), Decimal::ONE).is_ok());
        assert!(table.remove(&CurrencyCode::new("JPY")).is_none());
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::NEGATIVE_ONE)]
    fn non_positive_rates_are_rejected(#[case] rate: Decimal) {
        let mut table = jpy_table();
        let code = CurrencyCode::new("USD");
        assert_eq!(
            table.set(code.clone(), rate),
            Err(RateError::NonPositiveRate { code: code.clone(), rate })
        );
        assert!(!table.contains(&code));
    }

    #[test]
    fn unknown_code_defaults_to_one() {
        let table = jpy_table();
        assert_eq!(
            table.rate_or_default(&CurrencyCode::new("XYZ")),
            Decimal::ONE
        );
    }

    #[test]
    fn entry_order_is_preserved() {
        let mut table = jpy_table();
        table
            .set(CurrencyCode::new("AUD"), Decimal::new(965, 1))
            .expect("valid rate");
        let order: Vec<&str> = table.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(order, ["JPY", "HKD", "AUD"]);
    }
}

use fxhash::FxHashMap;
use rust_decimal::Decimal;

use crate::{
    model::{CurrencyCode, ExpenseRecord, Money},
    rates::RateTable,
    services::CurrencyConverter,
};

/// Per-category spending slice, in the display currency.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryStat {
    pub category: String,
    pub total: Money,
    /// Share of total spending, 0..=100.
    pub percent: Decimal,
}

/// Spending aggregates for the dashboard.
pub struct ExpenseStats;

impl ExpenseStats {
    /// Total of all expenses, normalized through the pivot and rendered in
    /// `display`.
    pub fn total_spent(
        expenses: &[ExpenseRecord],
        rates: &RateTable,
        display: &CurrencyCode,
    ) -> Money {
        let total_pivot: Money = expenses
            .iter()
            .map(|expense| CurrencyConverter::to_pivot(expense.amount, &expense.currency, rates))
            .sum();
        CurrencyConverter::convert(total_pivot, rates.pivot(), display, rates)
    }

    /// Spending per category, largest first, with percent of the total.
    /// Categories tie-break alphabetically so the output is deterministic.
    pub fn category_breakdown(
        expenses: &[ExpenseRecord],
        rates: &RateTable,
        display: &CurrencyCode,
    ) -> Vec<CategoryStat> {
        let mut totals: FxHashMap<&str, Money> = FxHashMap::default();
        let mut grand_total = Money::ZERO;
        for expense in expenses {
            let value =
                CurrencyConverter::convert(expense.amount, &expense.currency, display, rates);
            *totals.entry(expense.category.as_str()).or_insert(Money::ZERO) += value;
            grand_total += value;
        }

        let mut stats: Vec<CategoryStat> = totals
            .into_iter()
            .map(|(category, total)| CategoryStat {
                category: category.to_owned(),
                total,
                percent: if grand_total.is_positive() {
                    total.as_decimal() / grand_total.as_decimal() * Decimal::ONE_HUNDRED
                } else {
                    Decimal::ZERO
                },
            })
            .collect();
        stats.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberId;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn expense(category: &str, amount: i64, currency: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: format!("{category}-{amount}"),
            title: category.to_owned(),
            category: category.to_owned(),
            amount: Money::from_i64(amount),
            currency: CurrencyCode::new(currency),
            payer: MemberId::new("a"),
            participants: vec![MemberId::new("a")],
            settled: Default::default(),
            date: NaiveDate::from_ymd_opt(2024, 10, 13).expect("valid date"),
        }
    }

    #[fixture]
    fn rates() -> RateTable {
        let mut table = RateTable::new(CurrencyCode::new("JPY"));
        table
            .set(CurrencyCode::new("HKD"), Decimal::new(192, 1))
            .expect("valid rate");
        table
    }

    #[rstest]
    fn total_is_rendered_in_the_display_currency(rates: RateTable) {
        let expenses = [expense("Food", 3000, "JPY"), expense("Transport", 100, "HKD")];
        // 3000 + 1920 = 4920 JPY; 4920 / 19.2 = 256.25 HKD.
        let total =
            ExpenseStats::total_spent(&expenses, &rates, &CurrencyCode::new("HKD"));
        assert_eq!(total, Money::new(25625, 2));
    }

    #[rstest]
    fn breakdown_sorts_by_total_descending(rates: RateTable) {
        let expenses = [
            expense("Food", 1000, "JPY"),
            expense("Stay", 5000, "JPY"),
            expense("Food", 1000, "JPY"),
            expense("Transport", 3000, "JPY"),
        ];
        let stats =
            ExpenseStats::category_breakdown(&expenses, &rates, &CurrencyCode::new("JPY"));

        let order: Vec<&str> = stats.iter().map(|stat| stat.category.as_str()).collect();
        assert_eq!(order, ["Stay", "Transport", "Food"]);
        assert_eq!(stats[0].percent, Decimal::from(50));
        let percent_sum: Decimal = stats.iter().map(|stat| stat.percent).sum();
        assert_eq!(percent_sum, Decimal::ONE_HUNDRED);
    }

    #[rstest]
    fn empty_expense_list_yields_empty_breakdown(rates: RateTable) {
        let stats = ExpenseStats::category_breakdown(&[], &rates, &CurrencyCode::new("JPY"));
        assert!(stats.is_empty());
        assert_eq!(
            ExpenseStats::total_spent(&[], &rates, &CurrencyCode::new("JPY")),
            Money::ZERO
        );
    }
}

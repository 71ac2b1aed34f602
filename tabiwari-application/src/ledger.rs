use tabiwari_domain::{
    BalanceCalculator, CategoryStat, CurrencyConverter, ExpenseRecord, ExpenseStats,
    MemberBalances, Money, SettlementPlanner, Transfer,
};

use crate::{error::LedgerError, trip::TripBook};

/// Expense bookkeeping over the trip aggregate.
///
/// Mutations are validated here; reads delegate to the pure domain services
/// and recompute from the current record list every time.
pub struct LedgerService;

impl LedgerService {
    /// Adds a new expense or replaces the one sharing its id. New records go
    /// to the front, most recent first.
    pub fn upsert_expense(book: &mut TripBook, expense: ExpenseRecord) -> Result<(), LedgerError> {
        Self::validate(book, &expense)?;
        if let Some(existing) = book
            .expenses
            .iter_mut()
            .find(|candidate| candidate.id == expense.id)
        {
            *existing = expense;
        } else {
            book.expenses.insert(0, expense);
        }
        Ok(())
    }

    pub fn remove_expense(book: &mut TripBook, id: &str) -> bool {
        let before = book.expenses.len();
        book.expenses.retain(|expense| expense.id != id);
        book.expenses.len() != before
    }

    fn validate(book: &TripBook, expense: &ExpenseRecord) -> Result<(), LedgerError> {
        if !expense.amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount {
                amount: expense.amount,
            });
        }
        if !book.is_member(&expense.payer) {
            return Err(LedgerError::UnknownPayer {
                member: expense.payer.clone(),
            });
        }
        for participant in &expense.participants {
            if !book.is_member(participant) {
                return Err(LedgerError::UnknownParticipant {
                    member: participant.clone(),
                });
            }
        }
        Ok(())
    }

    /// Net pivot-currency balance per member.
    pub fn balances(book: &TripBook) -> MemberBalances {
        BalanceCalculator::compute(&book.expenses, &book.wallet.rates, &book.member_ids())
    }

    /// Suggested transfers that square the current balances.
    pub fn settlement_plan(book: &TripBook) -> Vec<Transfer> {
        SettlementPlanner::suggest(&Self::balances(book))
    }

    /// Total trip spending in the display currency.
    pub fn total_spent(book: &TripBook) -> Money {
        ExpenseStats::total_spent(
            &book.expenses,
            &book.wallet.rates,
            &book.wallet.display_currency,
        )
    }

    /// Per-category spending in the display currency, largest first.
    pub fn category_breakdown(book: &TripBook) -> Vec<CategoryStat> {
        ExpenseStats::category_breakdown(
            &book.expenses,
            &book.wallet.rates,
            &book.wallet.display_currency,
        )
    }

    /// One record's amount rendered in the display currency.
    pub fn display_amount(book: &TripBook, expense: &ExpenseRecord) -> Money {
        CurrencyConverter::convert(
            expense.amount,
            &expense.currency,
            &book.wallet.display_currency,
            &book.wallet.rates,
        )
    }
}

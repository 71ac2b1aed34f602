use rust_decimal::Decimal;

use crate::{
    model::{ExpenseRecord, MemberBalances, MemberId, Money},
    rates::RateTable,
    services::CurrencyConverter,
};

/// Derives per-member net balances from the expense list.
///
/// Balances are pivot-currency amounts, recomputed from scratch on every
/// call; nothing here is cached or stored.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes net balances for `members` over `expenses`.
    ///
    /// Per record: the full pivot amount is credited to the payer, then one
    /// share (`pivot / participant count`) is debited from every
    /// participant — the payer included when they are listed, so their net
    /// effect is `pivot - share`. Shares stay unrounded; rounding is a
    /// display concern.
    ///
    /// Participants marked settled on a record already squared their share
    /// with the payer out-of-band: the share is excluded from the payer's
    /// credit and their debit alike.
    ///
    /// Every credit is matched by equal total debits, so the balances sum to
    /// zero (up to division residue) whenever every referenced member id is
    /// known.
    pub fn compute(
        expenses: &[ExpenseRecord],
        rates: &RateTable,
        members: &[MemberId],
    ) -> MemberBalances {
        let mut balances: MemberBalances = members
            .iter()
            .cloned()
            .map(|member| (member, Money::ZERO))
            .collect();
        for expense in expenses {
            Self::apply(&mut balances, expense, rates);
        }
        balances
    }

    fn apply(balances: &mut MemberBalances, expense: &ExpenseRecord, rates: &RateTable) {
        if !balances.contains_key(&expense.payer) {
            // Crediting nobody while debiting the participants would break
            // the zero-sum invariant, so the whole record is skipped.
            tracing::warn!(
                expense = %expense.id,
                payer = %expense.payer,
                "Skipping expense with unknown payer"
            );
            return;
        }

        let pivot_amount = CurrencyConverter::to_pivot(expense.amount, &expense.currency, rates);

        // An empty split means the payer covered themselves; the record must
        // still not divide by zero.
        let self_paid = [expense.payer.clone()];
        let participants: &[MemberId] = if expense.participants.is_empty() {
            &self_paid
        } else {
            &expense.participants
        };

        let share = pivot_amount / Decimal::from(participants.len() as u64);
        let mut credit = pivot_amount;
        for participant in participants {
            if expense.settled.contains(participant) {
                credit -= share;
                continue;
            }
            if let Some(balance) = balances.get_mut(participant) {
                *balance -= share;
            } else {
                tracing::warn!(
                    expense = %expense.id,
                    participant = %participant,
                    "Skipping debit for unknown participant"
                );
            }
        }
        if let Some(balance) = balances.get_mut(&expense.payer) {
            *balance += credit;
        }
    }
}

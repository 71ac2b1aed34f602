use rust_decimal::Decimal;

use crate::model::{MemberBalances, MemberId, Money, Transfer};

/// Turns net balances into a short list of pairwise transfers.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Balances within this many pivot-currency units of zero are treated as
    /// settled. Keeps division residue from uneven splits out of the plan
    /// without hiding real sub-unit debts on decimal pivots.
    pub fn epsilon() -> Decimal {
        Decimal::new(1, 2) // 0.01
    }

    /// Greedy debt matching: repeatedly pair the largest remaining debtor
    /// with the largest remaining creditor and transfer
    /// `min(|debtor|, creditor)`.
    ///
    /// Both sides are index-advanced over sorted working vectors; ties in
    /// magnitude order by member id ascending, and when one transfer zeroes
    /// both parties the debtor index advances first. That makes the output
    /// fully deterministic; the order itself carries no meaning.
    ///
    /// Pairing the largest against the largest keeps the plan short in
    /// practice — at most `debtors + creditors - 1` transfers, since every
    /// transfer retires at least one side — though it is not a proof-optimal
    /// minimum. All balances within [`Self::epsilon`] of zero yield an empty
    /// plan. Cannot fail: conservation guarantees the two sides carry equal
    /// totals up to rounding.
    pub fn suggest(balances: &MemberBalances) -> Vec<Transfer> {
        let epsilon = Self::epsilon();
        let mut debtors: Vec<(MemberId, Decimal)> = balances
            .iter()
            .filter(|(_, balance)| balance.as_decimal() < -epsilon)
            .map(|(member, balance)| (member.clone(), balance.as_decimal()))
            .collect();
        let mut creditors: Vec<(MemberId, Decimal)> = balances
            .iter()
            .filter(|(_, balance)| balance.as_decimal() > epsilon)
            .map(|(member, balance)| (member.clone(), balance.as_decimal()))
            .collect();

        debtors.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut transfers = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let owed = -debtors[i].1;
            let due = creditors[j].1;
            let amount = owed.min(due);

            transfers.push(Transfer {
                from: debtors[i].0.clone(),
                to: creditors[j].0.clone(),
                amount: Money::from_decimal(amount),
            });

            debtors[i].1 += amount;
            creditors[j].1 -= amount;

            if debtors[i].1 > -epsilon {
                i += 1;
            }
            if creditors[j].1 < epsilon {
                j += 1;
            }
        }
        transfers
    }

    /// Applies a plan to a copy of the balances: each transfer credits the
    /// debtor and debits the creditor. Used to preview the post-settlement
    /// state; after applying `suggest`'s own output every balance lands
    /// within [`Self::epsilon`] of zero.
    pub fn apply(balances: &MemberBalances, transfers: &[Transfer]) -> MemberBalances {
        let mut result = balances.clone();
        for transfer in transfers {
            if let Some(balance) = result.get_mut(&transfer.from) {
                *balance += transfer.amount;
            }
            if let Some(balance) = result.get_mut(&transfer.to) {
                *balance -= transfer.amount;
            }
        }
        result
    }
}

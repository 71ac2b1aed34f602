use std::borrow::Cow;

use tabiwari_application::{MemberDirectory, WalletSettings};
use tabiwari_domain::{CurrencyConverter, MemberBalances, MemberId, Money, Transfer};

use crate::{
    money_format::{format_money, format_signed_money},
    text_table::{Alignment, TextTableBuilder},
};

pub const ALL_SETTLED: &str = "All settled up!";

/// Rendered settlement state: who stands where, and who pays whom.
pub struct SettlementView {
    pub balance_table: String,
    /// `None` when every balance is already within the planner's epsilon.
    pub transfer_table: Option<String>,
}

/// Renders balances and transfer plans in the wallet's display currency.
/// Amounts arrive in pivot units and are converted (and rounded) here only.
pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(
        balances: &MemberBalances,
        transfers: &[Transfer],
        wallet: &WalletSettings,
        directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let balance_table = Self::build_balance_table(balances, wallet, directory);
        let transfer_table = if transfers.is_empty() {
            None
        } else {
            Some(Self::build_transfer_table(transfers, wallet, directory))
        };
        SettlementView {
            balance_table,
            transfer_table,
        }
    }

    pub fn build_balance_table(
        balances: &MemberBalances,
        wallet: &WalletSettings,
        directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(["Member", "Balance"]);
        for (member, balance) in balances {
            builder = builder.row([
                member_label(member, directory).into_owned(),
                format_signed_money(
                    Self::to_display(*balance, wallet),
                    &wallet.display_currency,
                ),
            ]);
        }
        builder.build()
    }

    pub fn build_transfer_table(
        transfers: &[Transfer],
        wallet: &WalletSettings,
        directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(["From", "To", "Amount"]);
        for transfer in transfers {
            builder = builder.row([
                member_label(&transfer.from, directory).into_owned(),
                member_label(&transfer.to, directory).into_owned(),
                format_money(
                    Self::to_display(transfer.amount, wallet),
                    &wallet.display_currency,
                ),
            ]);
        }
        builder.build()
    }

    fn to_display(amount: Money, wallet: &WalletSettings) -> Money {
        CurrencyConverter::convert(
            amount,
            wallet.rates.pivot(),
            &wallet.display_currency,
            &wallet.rates,
        )
    }
}

fn member_label<'a>(member: &'a MemberId, directory: &'a dyn MemberDirectory) -> Cow<'a, str> {
    match directory.display_name(member) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(member.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn directory() -> HashMap<MemberId, String> {
        [("a", "Alice"), ("b", "Bret")]
            .into_iter()
            .map(|(id, name)| (MemberId::new(id), name.to_owned()))
            .collect()
    }

    fn balances() -> MemberBalances {
        [("a", 1500), ("b", -1500)]
            .into_iter()
            .map(|(id, amount)| (MemberId::new(id), Money::from_i64(amount)))
            .collect()
    }

    #[test]
    fn renders_balances_in_display_currency() {
        let wallet = WalletSettings::default();
        let view = SettlementPresenter::render(&balances(), &[], &wallet, &directory());

        // 1500 JPY at 19.2 JPY/HKD rounds to 78.1 for display.
        assert!(view.balance_table.contains("Alice"));
        assert!(view.balance_table.contains("+HKD 78.1"));
        assert!(view.balance_table.contains("HKD -78.1"));
        assert!(view.transfer_table.is_none());
    }

    #[test]
    fn renders_transfers_with_names() {
        let wallet = WalletSettings::default();
        let transfers = [Transfer {
            from: MemberId::new("b"),
            to: MemberId::new("a"),
            amount: Money::from_i64(1500),
        }];
        let view = SettlementPresenter::render(&balances(), &transfers, &wallet, &directory());

        let table = view.transfer_table.expect("transfer table");
        assert!(table.contains("Bret"));
        assert!(table.contains("Alice"));
        assert!(table.contains("HKD 78.1"));
    }

    #[test]
    fn unknown_members_fall_back_to_their_id() {
        let wallet = WalletSettings::default();
        let empty: HashMap<MemberId, String> = HashMap::new();
        let view = SettlementPresenter::render(&balances(), &[], &wallet, &empty);
        assert!(view.balance_table.contains('a'));
        assert!(view.balance_table.contains('b'));
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabiwari_domain::{
    Booking, ChecklistItem, CurrencyCode, ExpenseRecord, JournalPost, MemberId, RateTable,
    ScheduleItem, TripConfig, TripMember,
};

use crate::ports::MemberDirectory;

/// Currency preferences plus the rate table conversions read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletSettings {
    /// Currencies the group actually carries, in the order they were added.
    pub active_currencies: Vec<CurrencyCode>,
    /// Currency totals and plans are rendered in.
    pub display_currency: CurrencyCode,
    pub rates: RateTable,
}

impl Default for WalletSettings {
    fn default() -> Self {
        let mut rates = RateTable::new(CurrencyCode::new("JPY"));
        for (code, rate) in [
            ("HKD", Decimal::new(192, 1)),
            ("AUD", Decimal::new(965, 1)),
            ("USD", Decimal::new(1500, 1)),
            ("EUR", Decimal::new(1620, 1)),
            ("TWD", Decimal::new(47, 1)),
        ] {
            rates
                .set(CurrencyCode::new(code), rate)
                .expect("seed rates are positive");
        }
        Self {
            active_currencies: ["JPY", "HKD", "AUD"].map(CurrencyCode::new).to_vec(),
            display_currency: CurrencyCode::new("HKD"),
            rates,
        }
    }
}

/// Everything one trip persists: the unit the store loads and saves.
///
/// Balances, settlement plans and totals are derived on demand and are
/// deliberately absent here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripBook {
    #[serde(default)]
    pub config: TripConfig,
    #[serde(default)]
    pub members: Vec<TripMember>,
    #[serde(default)]
    pub itinerary: Vec<ScheduleItem>,
    /// Unscheduled ideas waiting to be dropped onto a day.
    #[serde(default)]
    pub pool: Vec<ScheduleItem>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub journal: Vec<JournalPost>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub wallet: WalletSettings,
}

impl TripBook {
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|member| member.id.clone()).collect()
    }

    pub fn is_member(&self, id: &MemberId) -> bool {
        self.members.iter().any(|member| &member.id == id)
    }

    pub fn member(&self, id: &MemberId) -> Option<&TripMember> {
        self.members.iter().find(|member| &member.id == id)
    }
}

impl MemberDirectory for TripBook {
    fn display_name(&self, member: &MemberId) -> Option<&str> {
        self.member(member).map(|found| found.name.as_str())
    }
}

#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod rates;
pub mod services;
pub mod trip;

pub use model::{CurrencyCode, ExpenseRecord, MemberBalances, MemberId, Money, Transfer};
pub use rates::{RateError, RateTable};
pub use services::{
    BalanceCalculator, CategoryStat, CurrencyConverter, ExpenseStats, SettlementPlanner,
};
pub use trip::{
    Assignee, Booking, BookingKind, ChecklistItem, ChecklistKind, ItemCategory, JournalPost,
    ScheduleItem, TripConfig, TripMember,
};

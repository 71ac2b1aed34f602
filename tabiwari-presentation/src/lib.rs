#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod money_format;
pub mod settlement;
pub mod summary;
pub mod text_table;

pub use money_format::{format_money, format_signed_money};
pub use settlement::{SettlementPresenter, SettlementView};
pub use summary::SummaryPresenter;
pub use text_table::{Alignment, TextTableBuilder};

#![warn(clippy::uninlined_format_args)]

pub mod bookings;
pub mod checklist;
pub mod error;
pub mod journal;
pub mod ledger;
pub mod ports;
pub mod rate_sync;
pub mod receipt;
pub mod schedule;
pub mod trip;

pub use bookings::BookingService;
pub use checklist::ChecklistService;
pub use error::{
    BookingError, JournalError, LedgerError, RateSourceError, RateSyncError, ReceiptCaptureError,
    ReceiptExtractError, StoreError,
};
pub use journal::JournalService;
pub use ledger::LedgerService;
pub use ports::{
    MemberDirectory, RateSource, RateUpdate, ReceiptDetails, ReceiptExtractor, ReceiptImage,
    TripStore,
};
pub use rate_sync::RateSyncService;
pub use receipt::ReceiptCapture;
pub use schedule::{Placement, ScheduleService};
pub use trip::{TripBook, WalletSettings};

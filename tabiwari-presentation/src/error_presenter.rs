//! Human-readable wording for application errors. Variants stay plain data;
//! the wording lives here so every surface says the same thing.

use tabiwari_application::{
    BookingError, JournalError, LedgerError, RateSourceError, RateSyncError, ReceiptCaptureError,
    ReceiptExtractError, StoreError,
};

pub fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::NonPositiveAmount { amount } => {
            format!("Expense amounts must be positive (got {amount}).")
        }
        LedgerError::UnknownPayer { member } => {
            format!("Payer '{member}' is not a trip member.")
        }
        LedgerError::UnknownParticipant { member } => {
            format!("Split participant '{member}' is not a trip member.")
        }
    }
}

pub fn format_booking_error(error: &BookingError) -> String {
    match error {
        BookingError::UnknownMember { member } => {
            format!("Booking owner '{member}' is not a trip member.")
        }
    }
}

pub fn format_journal_error(error: &JournalError) -> String {
    match error {
        JournalError::UnknownAuthor { member } => {
            format!("Journal author '{member}' is not a trip member.")
        }
    }
}

pub fn format_rate_sync_error(error: &RateSyncError) -> String {
    match error {
        RateSyncError::Source(source) => format_rate_source_error(source),
    }
}

pub fn format_rate_source_error(error: &RateSourceError) -> String {
    match error {
        RateSourceError::Transport { source } => {
            format!("Rate lookup failed: {source}")
        }
        RateSourceError::MalformedResponse { detail } => {
            format!("Rate lookup returned unusable data: {detail}")
        }
    }
}

pub fn format_receipt_capture_error(error: &ReceiptCaptureError) -> String {
    match error {
        ReceiptCaptureError::Extract(ReceiptExtractError::TotalNotFound) => {
            "Could not read a total from the receipt.".to_owned()
        }
        ReceiptCaptureError::Extract(ReceiptExtractError::Transport { source }) => {
            format!("Receipt extraction failed: {source}")
        }
        ReceiptCaptureError::Extract(ReceiptExtractError::MalformedResponse { detail }) => {
            format!("Receipt extraction returned unusable data: {detail}")
        }
        ReceiptCaptureError::NonPositiveAmount { amount } => {
            format!("Receipt total must be positive (got {amount}).")
        }
        ReceiptCaptureError::UnknownPayer { member } => {
            format!("Payer '{member}' is not a trip member.")
        }
    }
}

pub fn format_store_error(error: &StoreError) -> String {
    match error {
        StoreError::Io { source } => format!("Could not read or write the trip file: {source}"),
        StoreError::Corrupt { detail } => {
            format!("The trip file is not valid JSON: {detail}")
        }
    }
}

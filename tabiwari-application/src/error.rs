use rust_decimal::Decimal;
use tabiwari_domain::{MemberId, Money};

/// Rejected expense mutations. Validation happens here, at the application
/// boundary, so the pure balance/settlement core only ever sees well-formed
/// records.
#[derive(Clone, Debug, PartialEq)]
pub enum LedgerError {
    NonPositiveAmount { amount: Money },
    UnknownPayer { member: MemberId },
    UnknownParticipant { member: MemberId },
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingError {
    UnknownMember { member: MemberId },
}

#[derive(Clone, Debug, PartialEq)]
pub enum JournalError {
    UnknownAuthor { member: MemberId },
}

/// Failures of the external rate-lookup call.
#[derive(Debug)]
pub enum RateSourceError {
    Transport {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    MalformedResponse {
        detail: String,
    },
}

#[derive(Debug)]
pub enum RateSyncError {
    Source(RateSourceError),
}

impl From<RateSourceError> for RateSyncError {
    fn from(err: RateSourceError) -> Self {
        Self::Source(err)
    }
}

/// Failures of the external receipt-extraction call.
#[derive(Debug)]
pub enum ReceiptExtractError {
    Transport {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    MalformedResponse {
        detail: String,
    },
    /// The model answered but no total could be read from the reply.
    TotalNotFound,
}

#[derive(Debug)]
pub enum ReceiptCaptureError {
    Extract(ReceiptExtractError),
    NonPositiveAmount { amount: Decimal },
    UnknownPayer { member: MemberId },
}

impl From<ReceiptExtractError> for ReceiptCaptureError {
    fn from(err: ReceiptExtractError) -> Self {
        Self::Extract(err)
    }
}

/// Failures of the persistence port.
#[derive(Debug)]
pub enum StoreError {
    Io { source: std::io::Error },
    Corrupt { detail: String },
}

impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

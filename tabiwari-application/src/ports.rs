//! Ports to the collaborators this core does not own: the rate-lookup and
//! receipt-extraction calls (cloud language model behind an opaque adapter)
//! and the persistence layer.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tabiwari_domain::{CurrencyCode, MemberId};

use crate::{
    error::{RateSourceError, ReceiptExtractError, StoreError},
    trip::TripBook,
};

/// A batch of freshly fetched pivot-relative rates.
///
/// Plain data: the sync service decides what actually lands in the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateUpdate {
    pub rates: Vec<(CurrencyCode, Decimal)>,
}

/// External exchange-rate lookup. Implementations may block; the caller
/// treats the result as an opaque success-or-failure.
pub trait RateSource: Send + Sync {
    fn fetch(&self, currencies: &[CurrencyCode]) -> Result<RateUpdate, RateSourceError>;
}

/// A receipt photo as handed over by the (out-of-scope) UI layer.
pub struct ReceiptImage<'a> {
    pub bytes: &'a [u8],
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
}

/// Structured fields extracted from a receipt image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReceiptDetails {
    pub title: Option<String>,
    pub amount: Decimal,
    pub currency: Option<CurrencyCode>,
    pub category: Option<String>,
}

/// OCR-style extraction of a receipt into structured fields.
pub trait ReceiptExtractor: Send + Sync {
    fn extract(&self, image: &ReceiptImage<'_>) -> Result<ReceiptDetails, ReceiptExtractError>;
}

/// Persistence of the whole trip aggregate. The mechanics (file, browser
/// storage, ...) are the adapter's business.
pub trait TripStore: Send + Sync {
    fn load(&self) -> Result<TripBook, StoreError>;
    fn save(&self, book: &TripBook) -> Result<(), StoreError>;
}

/// Resolves member ids to display names for presenters.
pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member: &MemberId) -> Option<&str> {
        self.get(member).map(String::as_str)
    }
}

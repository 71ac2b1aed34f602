use chrono::NaiveDate;
use rust_decimal::Decimal;
use tabiwari_domain::{ExpenseRecord, MemberId, Money};

use crate::{
    error::ReceiptCaptureError,
    ports::{ReceiptExtractor, ReceiptImage},
    trip::TripBook,
};

/// Turns a receipt photo into a draft expense via the extraction port.
///
/// The draft is a plain [`ExpenseRecord`] the user still reviews and saves
/// through the ledger; capture never writes to the book itself.
pub struct ReceiptCapture;

impl ReceiptCapture {
    /// Resolves a draft expense for `payer`, split across all current
    /// members (the default split in the source app).
    ///
    /// The extracted currency is kept even when the wallet has no rate for
    /// it yet — unknown codes convert at rate 1 until a real rate arrives.
    /// A missing currency falls back to the pivot.
    pub fn draft_expense(
        book: &TripBook,
        payer: MemberId,
        image: &ReceiptImage<'_>,
        extractor: &dyn ReceiptExtractor,
        id: String,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, ReceiptCaptureError> {
        if !book.is_member(&payer) {
            return Err(ReceiptCaptureError::UnknownPayer { member: payer });
        }

        let details = extractor.extract(image)?;
        if details.amount <= Decimal::ZERO {
            return Err(ReceiptCaptureError::NonPositiveAmount {
                amount: details.amount,
            });
        }

        let category = details.category.unwrap_or_else(|| "Other".to_owned());
        let currency = details
            .currency
            .unwrap_or_else(|| book.wallet.rates.pivot().clone());
        tracing::debug!(
            expense = %id,
            amount = %details.amount,
            currency = %currency,
            "Drafted expense from receipt"
        );

        Ok(ExpenseRecord {
            id,
            title: details.title.unwrap_or_else(|| category.clone()),
            category,
            amount: Money::from_decimal(details.amount),
            currency,
            payer,
            participants: book.member_ids(),
            settled: Default::default(),
            date,
        })
    }
}

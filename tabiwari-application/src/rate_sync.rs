use tabiwari_domain::rates::RateError;

use crate::{
    error::RateSyncError,
    ports::RateSource,
    trip::WalletSettings,
};

/// Pulls fresh pivot-relative rates through the [`RateSource`] port and
/// merges them into the wallet.
///
/// The merge is the only policy here: the pivot stays at 1 no matter what
/// the source claims, non-positive rates are dropped, and codes the wallet
/// does not track yet are kept (they become available the moment the user
/// activates that currency). Transport, retries and timeouts are the
/// adapter's problem; the engine just re-reads whatever table is current on
/// the next recomputation.
pub struct RateSyncService;

impl RateSyncService {
    /// Fetches rates for every active non-pivot currency and merges them.
    /// Returns how many entries were applied.
    pub fn sync(
        wallet: &mut WalletSettings,
        source: &dyn RateSource,
    ) -> Result<usize, RateSyncError> {
        let targets: Vec<_> = wallet
            .active_currencies
            .iter()
            .filter(|code| *code != wallet.rates.pivot())
            .cloned()
            .collect();
        if targets.is_empty() {
            return Ok(0);
        }

        let update = source.fetch(&targets)?;
        let mut applied = 0;
        for (code, rate) in update.rates {
            match wallet.rates.set(code.clone(), rate) {
                Ok(()) => applied += 1,
                Err(RateError::NonPositiveRate { .. }) => {
                    tracing::warn!(code = %code, rate = %rate, "Discarding non-positive fetched rate");
                }
                Err(RateError::PivotRateNotUnit { .. }) => {
                    tracing::warn!(code = %code, rate = %rate, "Discarding fetched rate for the pivot currency");
                }
            }
        }
        tracing::info!(applied, "Exchange rates updated");
        Ok(applied)
    }
}

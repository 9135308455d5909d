//! Market-cap ranking.
//!
//! One quote lookup per universe ticker, run concurrently under a
//! semaphore sized to the requested top-N count. Lookups that fail or
//! return no capitalization drop the ticker from the ranking only, never
//! from the universe, and never abort the run.

use std::cmp::Ordering;
use std::sync::Arc;
use tamiz_fmp::FmpClient;
use tamiz_traits::Ticker;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Rank tickers by market capitalization, descending, and keep the top `n`.
///
/// Results are collected as lookups complete; ordering is made
/// deterministic afterwards by [`order_by_cap`]. Cancellation stops
/// pending lookups; tickers whose lookups were cancelled are simply
/// absent, as if their caps had been unavailable.
pub async fn rank_by_market_cap(
    client: &FmpClient,
    tickers: &[Ticker],
    n: usize,
    cancel: &CancellationToken,
) -> Vec<Ticker> {
    if n == 0 || tickers.is_empty() {
        return Vec::new();
    }

    let semaphore = Arc::new(Semaphore::new(n));
    let mut lookups = JoinSet::new();

    for ticker in tickers {
        let semaphore = Arc::clone(&semaphore);
        let client = client.clone();
        let ticker = ticker.clone();
        let cancel = cancel.clone();

        lookups.spawn(async move {
            // Closed only on shutdown; a closed semaphore means cancel
            let _permit = semaphore.acquire_owned().await.ok()?;
            let cap = tokio::select! {
                () = cancel.cancelled() => return None,
                result = client.market_cap(&ticker) => match result {
                    Ok(cap) => cap,
                    Err(e) => {
                        tracing::warn!(%ticker, error = %e, "market cap lookup failed");
                        None
                    }
                }
            };
            cap.map(|cap| (ticker, cap))
        });
    }

    let mut caps = Vec::new();
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok(Some(pair)) => caps.push(pair),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "market cap lookup task failed"),
        }
    }

    order_by_cap(caps, n)
}

/// Sort (ticker, cap) pairs by cap descending and truncate to `n`.
///
/// Cap ties break on ticker symbol ascending so that the cutoff at `n` is
/// reproducible across runs regardless of lookup completion order.
#[must_use]
pub fn order_by_cap(mut caps: Vec<(Ticker, f64)>, n: usize) -> Vec<Ticker> {
    caps.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    caps.truncate(n);
    caps.into_iter().map(|(ticker, _)| ticker).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(pairs: &[(&str, f64)]) -> Vec<(Ticker, f64)> {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn test_order_descending() {
        let ranked = order_by_cap(
            caps(&[("AAPL", 2.8e12), ("JNJ", 4.0e11), ("MSFT", 3.1e12)]),
            3,
        );
        assert_eq!(ranked, vec!["MSFT", "AAPL", "JNJ"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let ranked = order_by_cap(
            caps(&[("A", 4.0), ("B", 3.0), ("C", 2.0), ("D", 1.0)]),
            2,
        );
        assert_eq!(ranked, vec!["A", "B"]);
    }

    #[test]
    fn test_tie_breaks_on_ticker_ascending() {
        // Equal caps at the cutoff boundary must resolve deterministically
        let ranked = order_by_cap(caps(&[("ZZZ", 5.0), ("AAA", 5.0), ("MMM", 5.0)]), 2);
        assert_eq!(ranked, vec!["AAA", "MMM"]);
    }

    #[test]
    fn test_fewer_caps_than_n() {
        let ranked = order_by_cap(caps(&[("A", 1.0)]), 10);
        assert_eq!(ranked, vec!["A"]);
    }

    #[test]
    fn test_empty() {
        assert!(order_by_cap(Vec::new(), 5).is_empty());
    }

    #[tokio::test]
    async fn test_rank_zero_n_is_empty() {
        let client = FmpClient::new("test_key");
        let cancel = CancellationToken::new();
        let ranked = rank_by_market_cap(&client, &["AAPL".to_string()], 0, &cancel).await;
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_rank_empty_universe_is_empty() {
        let client = FmpClient::new("test_key");
        let cancel = CancellationToken::new();
        let ranked = rank_by_market_cap(&client, &[], 5, &cancel).await;
        assert!(ranked.is_empty());
    }
}

//! Screen command implementation.

use crate::output::{ConsoleSink, OutputFormat};
use anyhow::{Context, Result};
use tamiz_finviz::FinvizClient;
use tamiz_fmp::FmpClient;
use tamiz_screen::Screener;
use tamiz_universe::UniverseClient;
use tokio_util::sync::CancellationToken;

/// Run a screening pass over the top `top` S&P 500 companies.
pub(crate) async fn run_screen(top: usize, format: OutputFormat) -> Result<()> {
    let fmp = FmpClient::from_env().context("FMP API key not configured")?;
    let finviz = FinvizClient::new();

    let universe = UniverseClient::new()
        .sp500_constituents()
        .await
        .context("failed to fetch S&P 500 constituents")?;
    tracing::info!(constituents = universe.len(), "universe loaded");

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping");
            cancel_on_signal.cancel();
        }
    });

    let screener = Screener::new(fmp, finviz);
    let sink = ConsoleSink::new(format);
    let records = screener.run(&universe, top, &sink, &cancel).await?;
    tracing::info!(
        screened = top,
        scored = records.len(),
        skipped = top.saturating_sub(records.len()),
        "screening complete"
    );

    Ok(())
}

//! Universe command implementation.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tamiz_universe::UniverseClient;

/// List the S&P 500 constituents grouped by sector.
pub(crate) async fn list_universe() -> Result<()> {
    let universe = UniverseClient::new()
        .sp500_constituents()
        .await
        .context("failed to fetch S&P 500 constituents")?;

    if universe.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    let mut by_sector: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (ticker, sector) in &universe {
        by_sector.entry(sector.as_str()).or_default().push(ticker);
    }

    for (sector, tickers) in &by_sector {
        println!("{sector} ({})", tickers.len());
        for chunk in tickers.chunks(12) {
            println!("  {}", chunk.join(" "));
        }
        println!();
    }
    println!("{} constituents in {} sectors", universe.len(), by_sector.len());

    Ok(())
}

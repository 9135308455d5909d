//! Console output: progress reporting and result rendering.

use chrono::Local;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use tamiz_traits::{ResultSink, ScoreRecord};

/// How screening results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Fixed-width table
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Sink that draws a progress bar on stderr and renders the final list
/// on stdout.
#[derive(Debug)]
pub(crate) struct ConsoleSink {
    bar: ProgressBar,
    format: OutputFormat,
}

impl ConsoleSink {
    pub(crate) fn new(format: OutputFormat) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("screening");
        Self { bar, format }
    }
}

impl ResultSink for ConsoleSink {
    fn progress(&self, done: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(done as u64);
    }

    fn results(&self, records: &[ScoreRecord]) {
        self.bar.finish_and_clear();
        match self.format {
            OutputFormat::Text => {
                println!("Screened as of {}", Local::now().format("%Y-%m-%d"));
                println!();
                println!("{}", render_table(records));
            }
            OutputFormat::Json => match serde_json::to_string_pretty(records) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, "failed to serialize results"),
            },
        }
    }
}

/// Render score records as a fixed-width table, best score first.
pub(crate) fn render_table(records: &[ScoreRecord]) -> String {
    if records.is_empty() {
        return "No data to display".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<7} {:<24} {:>8} {:>7} {:>16} {:>6} {:>6} {:>7} {:>6} {:>6} {:>4} {:>4} {:>4} {:>6}\n",
        "Ticker",
        "Sector",
        "Growth%",
        "D/E",
        "FCF",
        "Curr",
        "Quick",
        "P/E",
        "PEG",
        "P/S",
        "G",
        "S",
        "V",
        "Total",
    ));
    out.push_str(&"-".repeat(117));
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "{:<7} {:<24} {:>8.2} {:>7.2} {:>16} {:>6.2} {:>6.2} {:>7} {:>6} {:>6} {:>4.1} {:>4.1} {:>4.1} {:>6.1}\n",
            r.ticker,
            r.sector,
            r.growth_pct,
            r.debt_to_equity,
            format_thousands(r.free_cash_flow),
            r.current_ratio,
            r.quick_ratio,
            fmt_opt(r.pe),
            fmt_opt(r.peg),
            fmt_opt(r.ps),
            r.growth_score,
            r.strength_score,
            r.valuation_score,
            r.total_score,
        ));
    }
    out
}

/// Format a value with thousands separators and no decimals.
pub(crate) fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 { format!("-{out}") } else { out }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str) -> ScoreRecord {
        ScoreRecord {
            ticker: ticker.to_string(),
            sector: "Industrials".to_string(),
            growth_pct: 62.5,
            debt_to_equity: 0.45,
            free_cash_flow: 12_345_678.0,
            current_ratio: 1.5,
            quick_ratio: 1.1,
            pe: Some(18.2),
            peg: None,
            ps: Some(1.3),
            growth_score: 3.0,
            strength_score: 4.0,
            valuation_score: 0.0,
            total_score: 7.0,
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1_000.0), "1,000");
        assert_eq!(format_thousands(12_345_678.0), "12,345,678");
        assert_eq!(format_thousands(-9_876_543.0), "-9,876,543");
    }

    #[test]
    fn test_format_thousands_drops_decimals() {
        assert_eq!(format_thousands(1_234.56), "1,235");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No data to display");
    }

    #[test]
    fn test_render_table_rows() {
        let table = render_table(&[record("AAPL"), record("MSFT")]);
        assert!(table.contains("Ticker"));
        assert!(table.contains("AAPL"));
        assert!(table.contains("MSFT"));
        assert!(table.contains("12,345,678"));
        // Missing PEG renders as a dash, not a zero
        assert!(table.contains(" - "));
    }
}

//! Quote Provider Trait
//!
//! Abstraction over price sources: exchange APIs, cached snapshots,
//! static tables.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::warn;

use equity_advisor::{Quote, Result};

/// Price source for a set of tickers on a trading date
///
/// Implement this for each source: Polygon, cached CSV, static table.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Get the closing quote for one ticker on the given trading date
    async fn quote(&self, ticker: &str, as_of: NaiveDate) -> Result<Quote>;

    /// Get quotes for multiple tickers.
    ///
    /// Tickers without a retrievable price are dropped here, before the
    /// allocator ever sees them; the allocator then guarantees one
    /// output row per ticker it was given.
    async fn quotes(&self, tickers: &[&str], as_of: NaiveDate) -> Result<Vec<Quote>> {
        let mut quotes = Vec::new();
        for ticker in tickers {
            match self.quote(ticker, as_of).await {
                Ok(quote) => quotes.push(quote),
                Err(error) => warn!(%ticker, %error, "skipping ticker without a price"),
            }
        }
        Ok(quotes)
    }

    /// Check if the price source is available
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}

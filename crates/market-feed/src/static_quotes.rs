//! Static Quote Provider
//!
//! For testing and demo purposes. Returns realistic fixed prices.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use equity_advisor::{AdvisorError, Quote, Result};

use super::QuoteProvider;

/// In-memory quote provider with a fixed large-cap price table
pub struct StaticQuoteProvider {
    /// Caller-supplied prices; consulted before the built-in table
    overrides: HashMap<String, Decimal>,
}

impl Default for StaticQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticQuoteProvider {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Add or override a ticker's price (for tests)
    #[must_use]
    pub fn with_quote(mut self, ticker: impl Into<String>, price: Decimal) -> Self {
        self.overrides.insert(ticker.into().to_uppercase(), price);
        self
    }

    /// Built-in table: (closing price, shares traded)
    fn base_quote(ticker: &str) -> Option<(Decimal, Decimal)> {
        match ticker {
            "AAPL" => Some((dec!(232.50), dec!(48_210_000))),
            "MSFT" => Some((dec!(415.00), dec!(19_540_000))),
            "NVDA" => Some((dec!(118.25), dec!(212_300_000))),
            "AMZN" => Some((dec!(178.40), dec!(31_870_000))),
            "GOOGL" => Some((dec!(165.30), dec!(24_650_000))),
            "META" => Some((dec!(520.75), dec!(12_480_000))),
            "BRK.B" => Some((dec!(465.20), dec!(3_120_000))),
            "TSLA" => Some((dec!(245.60), dec!(88_940_000))),
            "JPM" => Some((dec!(210.10), dec!(8_770_000))),
            "V" => Some((dec!(290.45), dec!(5_430_000))),
            "XOM" => Some((dec!(115.00), dec!(14_210_000))),
            "JNJ" => Some((dec!(160.85), dec!(6_950_000))),
            _ => None,
        }
    }
}

#[async_trait]
impl QuoteProvider for StaticQuoteProvider {
    async fn quote(&self, ticker: &str, as_of: NaiveDate) -> Result<Quote> {
        let symbol = ticker.to_uppercase();

        if let Some(&price) = self.overrides.get(&symbol) {
            return Ok(Quote::new(symbol, price).with_as_of(as_of));
        }

        let (price, volume) = Self::base_quote(&symbol)
            .ok_or_else(|| AdvisorError::PriceUnavailable(ticker.to_string()))?;

        // Dollar volume stands in for market cap, as the upstream data
        // feed reports it
        Ok(Quote::new(symbol, price)
            .with_market_cap((price * volume).round_dp(2))
            .with_as_of(as_of))
    }

    async fn health_check(&self) -> bool {
        true // Static table is always available
    }

    fn name(&self) -> &str {
        "StaticQuotes"
    }
}

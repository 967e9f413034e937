//! Domain Models
//!
//! Core data types for equal-weight portfolio recommendations.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{AdvisorError, Result};

/// A closing-price quote for one ticker
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol (e.g., "AAPL", "MSFT")
    pub ticker: String,

    /// Closing price in USD
    pub price: Decimal,

    /// Dollar volume traded on the quote date, when the feed reports it.
    /// Carried through to the output table; the allocator never reads it.
    pub market_cap: Option<Decimal>,

    /// Trading date the price belongs to
    pub as_of: NaiveDate,
}

impl Quote {
    pub fn new(ticker: impl Into<String>, price: Decimal) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            price,
            market_cap: None,
            as_of: Utc::now().date_naive(),
        }
    }

    #[must_use]
    pub fn with_market_cap(mut self, market_cap: Decimal) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    #[must_use]
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }
}

/// One line of an allocation table: how many shares of a ticker to buy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Ticker symbol
    pub ticker: String,

    /// Price used for the recommendation
    pub price: Decimal,

    /// Dollar volume, passed through from the quote
    pub market_cap: Option<Decimal>,

    /// Whole shares to buy; never decreases during redistribution
    pub shares: u64,

    /// `shares * price`, rounded to cents
    pub allocated: Decimal,
}

impl AllocationRow {
    pub(crate) fn from_quote(quote: &Quote, shares: u64) -> Self {
        Self {
            ticker: quote.ticker.clone(),
            price: quote.price,
            market_cap: quote.market_cap,
            shares,
            allocated: (Decimal::from(shares) * quote.price).round_dp(2),
        }
    }

    /// Re-derive the allocated amount after a share-count change
    pub(crate) fn reprice(&mut self) {
        self.allocated = (Decimal::from(self.shares) * self.price).round_dp(2);
    }
}

/// A request to spread `capital` across `quotes`
///
/// Immutable once built; `new` rejects inputs the allocator cannot
/// handle (empty universe, non-positive capital or price, duplicate
/// tickers).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioRequest {
    /// Total investable capital in USD
    pub capital: Decimal,

    /// One quote per ticker, in caller-chosen order
    pub quotes: Vec<Quote>,
}

impl PortfolioRequest {
    pub fn new(capital: Decimal, quotes: Vec<Quote>) -> Result<Self> {
        let request = Self { capital, quotes };
        request.validate()?;
        Ok(request)
    }

    /// Check the request against the allocator's preconditions.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::InvalidInput` if the quote list is empty,
    /// capital is not positive, any price is not positive, or a ticker
    /// appears more than once.
    pub fn validate(&self) -> Result<()> {
        if self.quotes.is_empty() {
            return Err(AdvisorError::InvalidInput("quote list is empty".into()));
        }
        if self.capital <= Decimal::ZERO {
            return Err(AdvisorError::InvalidInput(format!(
                "capital must be positive, got {}",
                self.capital
            )));
        }

        let mut seen = HashSet::with_capacity(self.quotes.len());
        for quote in &self.quotes {
            if quote.price <= Decimal::ZERO {
                return Err(AdvisorError::InvalidInput(format!(
                    "non-positive price {} for {}",
                    quote.price, quote.ticker
                )));
            }
            if !seen.insert(quote.ticker.as_str()) {
                return Err(AdvisorError::InvalidInput(format!(
                    "duplicate ticker {}",
                    quote.ticker
                )));
            }
        }

        Ok(())
    }
}

/// A complete equal-weight allocation plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// Capital the plan was built for
    pub capital: Decimal,

    /// Per-ticker budget (`capital / ticker count`), unrounded
    pub position_size: Decimal,

    /// One row per input quote, in input order
    pub rows: Vec<AllocationRow>,
}

impl AllocationPlan {
    pub fn new(capital: Decimal, position_size: Decimal, rows: Vec<AllocationRow>) -> Self {
        Self {
            capital,
            position_size,
            rows,
        }
    }

    /// Sum of allocated amounts across all rows
    pub fn total_allocated(&self) -> Decimal {
        self.rows.iter().map(|r| r.allocated).sum()
    }

    /// Cash left unspent after redistribution
    pub fn residual(&self) -> Decimal {
        self.capital - self.total_allocated()
    }

    /// Generate summary
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "Equal-weight plan: ${:.2} across {} tickers\n",
            self.capital,
            self.rows.len()
        ));
        s.push_str(&format!("Position size: ${:.2}\n", self.position_size));

        for row in &self.rows {
            s.push_str(&format!(
                "  {:<6} {:>5} x ${:.2} = ${:.2}\n",
                row.ticker, row.shares, row.price, row.allocated
            ));
        }

        s.push_str(&format!(
            "Allocated: ${:.2}, residual cash: ${:.2}\n",
            self.total_allocated(),
            self.residual()
        ));

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_uppercases_ticker() {
        let quote = Quote::new("aapl", dec!(232.50));
        assert_eq!(quote.ticker, "AAPL");
        assert!(quote.market_cap.is_none());
    }

    #[test]
    fn test_request_rejects_empty_quotes() {
        let result = PortfolioRequest::new(dec!(1000), Vec::new());
        assert!(matches!(result, Err(AdvisorError::InvalidInput(_))));
    }

    #[test]
    fn test_request_rejects_non_positive_capital() {
        let quotes = vec![Quote::new("AAPL", dec!(232.50))];
        assert!(PortfolioRequest::new(dec!(0), quotes.clone()).is_err());
        assert!(PortfolioRequest::new(dec!(-50), quotes).is_err());
    }

    #[test]
    fn test_request_rejects_non_positive_price() {
        let quotes = vec![Quote::new("AAPL", dec!(0))];
        assert!(PortfolioRequest::new(dec!(1000), quotes).is_err());
    }

    #[test]
    fn test_request_rejects_duplicate_tickers() {
        let quotes = vec![
            Quote::new("AAPL", dec!(232.50)),
            Quote::new("aapl", dec!(231.00)),
        ];
        let result = PortfolioRequest::new(dec!(1000), quotes);
        assert!(matches!(result, Err(AdvisorError::InvalidInput(reason)) if reason.contains("duplicate")));
    }

    #[test]
    fn test_plan_totals() {
        let quote_a = Quote::new("AAPL", dec!(100));
        let quote_b = Quote::new("MSFT", dec!(40));
        let rows = vec![
            AllocationRow::from_quote(&quote_a, 2),
            AllocationRow::from_quote(&quote_b, 3),
        ];
        let plan = AllocationPlan::new(dec!(350), dec!(175), rows);

        assert_eq!(plan.total_allocated(), dec!(320));
        assert_eq!(plan.residual(), dec!(30));
    }

    #[test]
    fn test_row_reprice_rounds_to_cents() {
        let quote = Quote::new("BRK.B", dec!(465.335));
        let mut row = AllocationRow::from_quote(&quote, 3);
        assert_eq!(row.allocated, dec!(1396.00)); // 1396.005, banker's rounding

        row.shares += 1;
        row.reprice();
        assert_eq!(row.allocated, dec!(1861.34));
    }
}

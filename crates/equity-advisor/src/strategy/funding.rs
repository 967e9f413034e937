//! Minimum-Capital Funding Checks
//!
//! The allocator itself happily returns all-zero plans when capital is
//! tiny; whether that is acceptable is the caller's call. These policies
//! package the common "is the pot big enough" thresholds so callers can
//! reject a request up front instead of re-deriving the math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::model::Quote;

/// Caller-level minimum-capital policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimumCapital {
    /// Capital must cover one share of every ticker priced at the most
    /// expensive quote: `ticker count * max(price)`. The strictest
    /// common threshold.
    UniformAtMaxPrice,

    /// Capital must cover one share of each ticker at its own price:
    /// `sum(price)`.
    OneShareEach,
}

impl MinimumCapital {
    /// Capital required to satisfy this policy for the given quotes
    pub fn required(&self, quotes: &[Quote]) -> Decimal {
        match self {
            Self::UniformAtMaxPrice => {
                let max_price = quotes
                    .iter()
                    .map(|q| q.price)
                    .max()
                    .unwrap_or(Decimal::ZERO);
                max_price * Decimal::from(quotes.len())
            }
            Self::OneShareEach => quotes.iter().map(|q| q.price).sum(),
        }
    }

    /// Reject the request if `capital` falls below the policy threshold.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::InsufficientCapital` with the required and
    /// available amounts.
    pub fn check(&self, capital: Decimal, quotes: &[Quote]) -> Result<()> {
        let needed = self.required(quotes);
        if capital < needed {
            return Err(AdvisorError::InsufficientCapital {
                needed,
                available: capital,
            });
        }
        Ok(())
    }
}

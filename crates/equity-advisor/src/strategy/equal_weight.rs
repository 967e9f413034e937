//! Equal-Weight Allocation Strategy
//!
//! Splits capital evenly across tickers, then spends down the leftover
//! cash by giving one extra share to the tickers whose per-ticker budget
//! came closest to affording it.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::Result;
use crate::model::{AllocationPlan, AllocationRow, PortfolioRequest};

/// Equal-weight strategy with fractional-gap residual redistribution
///
/// Every ticker gets the same nominal budget (`capital / ticker count`).
/// Whole-share rounding leaves cash on the table; a single greedy pass
/// hands out at most one extra share per ticker, most-deserving first.
/// The pass is deliberately not a knapsack solve: a ticker that becomes
/// affordable only after someone else was skipped does not get a second
/// look. Simplicity wins over squeezing the last few dollars in.
#[derive(Clone, Copy, Debug, Default)]
pub struct EqualWeightStrategy;

impl EqualWeightStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Build an allocation plan for the request.
    ///
    /// Output rows keep the input order and cardinality, even when a
    /// ticker ends up with zero shares. The allocated total never
    /// exceeds the requested capital.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::InvalidInput` for an empty quote list or a
    /// non-positive capital or price, before any arithmetic runs.
    pub fn allocate(&self, request: &PortfolioRequest) -> Result<AllocationPlan> {
        request.validate()?;

        let ticker_count = Decimal::from(request.quotes.len());
        let position_size = request.capital / ticker_count;

        let mut rows: Vec<AllocationRow> = request
            .quotes
            .iter()
            .map(|quote| {
                let shares = (position_size / quote.price)
                    .floor()
                    .to_u64()
                    .unwrap_or(0);
                AllocationRow::from_quote(quote, shares)
            })
            .collect();

        let allocated: Decimal = rows.iter().map(|r| r.allocated).sum();
        let residual = request.capital - allocated;

        if residual > Decimal::ZERO {
            Self::redistribute(position_size, residual, &mut rows);
        }

        Ok(AllocationPlan::new(request.capital, position_size, rows))
    }

    /// One greedy pass over the rows, ordered by fractional gap.
    ///
    /// The gap `(position_size mod price) / price` lies in `[0, 1)` and
    /// measures how close the budget came to funding one more share.
    /// Ties keep input order (stable sort), so identical inputs always
    /// produce identical plans.
    fn redistribute(position_size: Decimal, mut residual: Decimal, rows: &mut [AllocationRow]) {
        let gaps: Vec<Decimal> = rows
            .iter()
            .map(|row| (position_size % row.price) / row.price)
            .collect();

        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| gaps[b].cmp(&gaps[a]));

        for index in order {
            if residual <= Decimal::ZERO {
                break;
            }
            let row = &mut rows[index];
            if residual >= row.price {
                row.shares += 1;
                row.reprice();
                residual -= row.price;
                debug!(
                    ticker = %row.ticker,
                    price = %row.price,
                    remaining = %residual,
                    "residual pass bought one extra share"
                );
            }
        }
    }
}

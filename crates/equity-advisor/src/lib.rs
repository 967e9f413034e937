//! # equity-advisor
//!
//! Equal-weight stock portfolio recommendations with residual-cash
//! redistribution.
//!
//! ## Philosophy
//!
//! Every ticker gets the same nominal budget, whatever its price or
//! market cap. Whole-share rounding always strands some cash, so a
//! second pass hands one extra share to the tickers that came closest
//! to affording it:
//!
//! - **Equal weight over conviction** - No ticker is favored; the only
//!   inputs are capital and prices
//! - **Whole shares only** - No fractional-share assumptions
//! - **Greedy residual pass** - One extra share per ticker at most,
//!   highest fractional gap first
//! - **Never overspend** - The allocated total stays at or below the
//!   requested capital
//!
//! ## Example: $10,000 across 5 tickers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Equal weight: $10,000 / 5 = $2,000 per ticker               │
//! ├──────────────────────────────────────────────────────────────┤
//! │  AAPL   8 x $232.50 = $1,860.00   gap 0.60                   │
//! │  MSFT   5 x $415.00 = $2,075.00   gap 0.82  +1 residual      │
//! │  NVDA  17 x $118.25 = $2,010.25   gap 0.91  +1 residual      │
//! │  JPM    9 x $210.10 = $1,890.90   gap 0.52  (short by $1.25) │
//! │  XOM   18 x $115.00 = $2,070.00   gap 0.39  +1 residual      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Allocated $9,906.15 - residual cash $93.85                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The residual pass walks tickers by fractional gap (how close the
//! $2,000 budget came to one more share) and buys where it still can.
//! JPM misses out: by its turn only $208.85 remains, $1.25 short of a
//! share. That cash is returned, not forced into a worse fit.

pub mod error;
pub mod model;
pub mod strategy;

pub use error::{AdvisorError, Result};
pub use model::{AllocationPlan, AllocationRow, PortfolioRequest, Quote};
pub use strategy::{EqualWeightStrategy, MinimumCapital};

//! # market-feed
//!
//! The data boundary in front of the equal-weight allocator: an async
//! quote-provider trait, a static in-memory implementation for tests
//! and demos, and the trading-day calendar used to pick the as-of date.
//!
//! Real price sources (exchange REST APIs, cached CSV snapshots) live
//! behind [`QuoteProvider`]; the allocator only ever sees the
//! materialized `Quote` table a provider hands back.

pub mod calendar;

mod provider;
mod static_quotes;

pub use provider::QuoteProvider;
pub use static_quotes::StaticQuoteProvider;

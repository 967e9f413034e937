//! Error Types for the Equity Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Price unavailable for {0}")]
    PriceUnavailable(String),

    #[error("Insufficient capital: need {needed}, have {available}")]
    InsufficientCapital {
        needed: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    #[error("Feed error: {0}")]
    Feed(String),
}

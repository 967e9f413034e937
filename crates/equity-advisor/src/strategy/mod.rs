//! Allocation Strategies
//!
//! The equal-weight allocator and the caller-level funding checks that
//! gate it.

mod equal_weight;
mod funding;

pub use equal_weight::EqualWeightStrategy;
pub use funding::MinimumCapital;

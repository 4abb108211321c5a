//! Allocation Core - Percentage allocation of portfolio holdings.
//!
//! Given an ordered list of named holdings, computes each holding's share of
//! the total holding value as a formatted percentage string.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;
pub use settings::AllocationSettings;

// Re-export error types
pub use errors::AllocationError;
pub use errors::Error;
pub use errors::Result;

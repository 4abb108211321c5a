/// Message carried by the empty-input allocation error
pub const EMPTY_HOLDINGS_MESSAGE: &str = "Sorry, but you have no asset to allocate!";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Upper bound accepted for the configured display precision
pub const MAX_DECIMAL_PRECISION: u32 = 10;

/// Suffix appended to formatted percentages
pub const PERCENT_SUFFIX: char = '%';

//! Calculator computing each holding's percentage of the total holding value.

use log::{debug, warn};

use crate::errors::{AllocationError, Result};
use crate::portfolio::holdings::HoldingItem;
use crate::settings::AllocationSettings;
use crate::utils::{format_percentage, percentage_of};

use super::AllocatedItem;

/// Trait for allocation calculators.
pub trait AllocationCalculatorTrait: Send + Sync {
    /// Pairs every holding with its share of the total value, in input order.
    /// Returns `AllocationError::EmptyInput` when `items` is empty.
    fn allocate(
        &self,
        items: &[HoldingItem],
    ) -> std::result::Result<Vec<AllocatedItem>, AllocationError>;
}

/// Computes percentage allocations of holdings relative to their total.
#[derive(Debug, Clone, Default)]
pub struct AllocationCalculator {
    settings: AllocationSettings,
}

impl AllocationCalculator {
    pub fn new(settings: AllocationSettings) -> Self {
        Self { settings }
    }
}

impl AllocationCalculatorTrait for AllocationCalculator {
    fn allocate(
        &self,
        items: &[HoldingItem],
    ) -> std::result::Result<Vec<AllocatedItem>, AllocationError> {
        if items.is_empty() {
            debug!("No holdings supplied for allocation");
            return Err(AllocationError::EmptyInput);
        }

        let total = total_holding_value(items);
        debug!(
            "Allocating {} holdings against total value {}",
            items.len(),
            total
        );

        // A zero total is not guarded: percentages come out as NaN or infinite.
        if total == 0.0 || !total.is_finite() {
            warn!(
                "Total holding value is {}; allocation percentages will not be finite",
                total
            );
        }

        let decimal_places = self.settings.decimal_places;
        let allocations = items
            .iter()
            .map(|item| AllocatedItem {
                allocated_item: item.clone(),
                total_holding_percentage: format_percentage(
                    percentage_of(item.value, total),
                    decimal_places,
                ),
            })
            .collect();

        Ok(allocations)
    }
}

/// Sum of all holding values, accumulated in input order.
pub fn total_holding_value(items: &[HoldingItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.value)
}

/// Allocates holdings with the default two-decimal settings.
pub fn allocate(
    items: &[HoldingItem],
) -> std::result::Result<Vec<AllocatedItem>, AllocationError> {
    AllocationCalculator::default().allocate(items)
}

/// Allocates a JSON array of `{ "name", "value" }` holdings and returns the
/// allocations as a JSON array of `{ "allocatedItem", "totalHoldingPercentage" }`.
pub fn allocate_json(input: &str) -> Result<String> {
    let items: Vec<HoldingItem> = serde_json::from_str(input)?;
    let allocations = allocate(&items)?;
    Ok(serde_json::to_string(&allocations)?)
}

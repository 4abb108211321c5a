//! Allocation models pairing holdings with their share of the total.

use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::HoldingItem;

/// A holding together with its formatted percentage of the total holding value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedItem {
    /// The originating holding
    pub allocated_item: HoldingItem,
    /// Share of the total value, e.g. "99.50%"
    pub total_holding_percentage: String,
}

use serde::{Deserialize, Serialize};

/// A named asset and its monetary value, as supplied by the caller.
///
/// Names are not required to be unique and values are not validated;
/// negative values are carried through the allocation arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingItem {
    pub name: String,
    pub value: f64,
}

impl HoldingItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

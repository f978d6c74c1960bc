use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inventory balance for one (date, location, item) triple.
///
/// The date and location are the keys of the [`BalanceBook`] this record
/// lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub item_id: String,
    pub expiry_date: Option<String>,
    pub available_qty: u32,
    pub onhand_qty: u32,
    pub transit_qty: u32,
    pub allocated_qty: u32,
    pub suspense_qty: u32,
}

impl Inventory {
    pub fn new(item_id: impl Into<String>, onhand_qty: u32) -> Self {
        Self {
            item_id: item_id.into(),
            expiry_date: None,
            available_qty: onhand_qty,
            onhand_qty,
            transit_qty: 0,
            allocated_qty: 0,
            suspense_qty: 0,
        }
    }
}

/// A single order line: a quantity of one item leaving or entering the
/// warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub item_id: String,
    pub requested_qty: u32,
    pub total_qty: u32,
}

impl Order {
    pub fn new(id: impl Into<String>, item_id: impl Into<String>, total_qty: u32) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            requested_qty: total_qty,
            total_qty,
        }
    }
}

/// Inventory balances keyed by ISO-8601 date, then by location id.
///
/// The ordered outer map makes the latest balance the last entry.
pub type BalanceBook = BTreeMap<String, FxHashMap<String, Inventory>>;

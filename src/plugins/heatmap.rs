//! Pick-frequency heat statistics.
//!
//! Orders are joined against the latest inventory balance: every
//! location that held the ordered item on that date accumulates the
//! order quantity into its `freq` field. The frequencies drive the
//! heat-map coloring in the view layer.

use crate::data::inventory::{BalanceBook, Order};
use crate::data::location::Location;
use fxhash::FxHashMap;

/// Maps each item to the locations holding it on the given balance date.
pub fn item_locations<'a>(
    balance: &'a BalanceBook,
    date: &str,
) -> FxHashMap<&'a str, Vec<&'a str>> {
    let mut item_to_locs: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    if let Some(day) = balance.get(date) {
        for (loc_id, inv) in day {
            item_to_locs
                .entry(inv.item_id.as_str())
                .or_default()
                .push(loc_id.as_str());
        }
    }
    item_to_locs
}

/// Accumulates order quantities onto the locations holding each ordered
/// item on the latest balance date.
///
/// Frequencies are reset first, so repeated calls do not double-count.
/// Orders whose item has no location on the latest date are skipped, and
/// only storage locations accumulate heat.
pub fn compute_frequencies(
    locations: &mut FxHashMap<String, Location>,
    balance: &BalanceBook,
    orders: &[Order],
) {
    for loc in locations.values_mut() {
        loc.freq = 0.0;
    }

    let latest = match balance.keys().next_back() {
        Some(date) => date.clone(),
        None => {
            log::warn!("frequency computation skipped: empty balance book");
            return;
        }
    };
    let item_to_locs = item_locations(balance, &latest);

    for order in orders {
        let locs = match item_to_locs.get(order.item_id.as_str()) {
            Some(locs) => locs,
            None => {
                log::warn!(
                    "order {}: item {} not on balance {}, skipping",
                    order.id,
                    order.item_id,
                    latest
                );
                continue;
            }
        };
        for loc_id in locs {
            if let Some(loc) = locations.get_mut(*loc_id) {
                if loc.kind.is_storage() {
                    loc.freq += f64::from(order.total_qty);
                }
            }
        }
    }
}

/// Gets the highest frequency across all locations, the ceiling for
/// heat normalization. Zero for an empty map.
pub fn max_heat(locations: &FxHashMap<String, Location>) -> f64 {
    locations.values().map(|l| l.freq).fold(0.0, f64::max)
}

/// Scales a frequency into [0, 1] against the given ceiling.
pub fn normalized_heat(freq: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        0.0
    } else {
        (freq / ceiling).clamp(0.0, 1.0)
    }
}

//! Planar stacking for the top-down view.
//!
//! Rack levels share floor coordinates; the 2D view draws one shape per
//! coordinate and aggregates heat across the stacked levels.

use crate::core::geo::Point;
use crate::data::location::Location;
use fxhash::FxHashMap;

/// A column of locations sharing the same floor coordinate, ordered
/// bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStack {
    /// Shared planar coordinate of the stacked locations
    pub coord: Point,
    /// Member location ids, sorted by z ascending
    pub ids: Vec<String>,
}

impl LocationStack {
    /// Gets the number of stacked locations
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Check if this is a single-location stack
    pub fn is_single(&self) -> bool {
        self.ids.len() == 1
    }

    /// Gets the bottom location of the stack, which the 2D view uses
    /// for kind and footprint.
    pub fn base<'a>(&self, locations: &'a FxHashMap<String, Location>) -> Option<&'a Location> {
        self.ids.first().and_then(|id| locations.get(id))
    }

    /// Gets the heat of a single level, counted from the bottom.
    pub fn heat_at(&self, locations: &FxHashMap<String, Location>, level: usize) -> f64 {
        self.ids
            .get(level)
            .and_then(|id| locations.get(id))
            .map_or(0.0, |loc| loc.freq)
    }

    /// Gets the summed heat of the whole stack.
    pub fn total_heat(&self, locations: &FxHashMap<String, Location>) -> f64 {
        self.ids
            .iter()
            .filter_map(|id| locations.get(id))
            .map(|loc| loc.freq)
            .sum()
    }
}

/// Groups locations sharing the same planar coordinate into stacks.
///
/// Stacks are returned sorted by coordinate so the output is stable
/// across runs; members within a stack are sorted by z.
pub fn cluster_locations(locations: &FxHashMap<String, Location>) -> Vec<LocationStack> {
    let mut by_coord: FxHashMap<(u64, u64), Vec<&Location>> = FxHashMap::default();
    for loc in locations.values() {
        // Exact coordinate match, keyed by bit pattern
        let key = (loc.x.to_bits(), loc.y.to_bits());
        by_coord.entry(key).or_default().push(loc);
    }

    let mut stacks: Vec<LocationStack> = by_coord
        .into_values()
        .map(|mut members| {
            members.sort_by(|a, b| a.z.total_cmp(&b.z));
            LocationStack {
                coord: members[0].planar_coord(),
                ids: members.iter().map(|l| l.id.clone()).collect(),
            }
        })
        .collect();

    stacks.sort_by(|a, b| {
        a.coord
            .x
            .total_cmp(&b.coord.x)
            .then(a.coord.y.total_cmp(&b.coord.y))
    });
    stacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::location::LocationKind;

    fn rack_at(id: &str, x: f64, y: f64, z: f64) -> Location {
        let mut loc = Location::new(id, LocationKind::Rack, 1.2, 0.8, 2.0);
        loc.set_coord(x, y, z);
        loc
    }

    fn to_map(locs: Vec<Location>) -> FxHashMap<String, Location> {
        locs.into_iter().map(|l| (l.id.clone(), l)).collect()
    }

    #[test]
    fn test_stacks_group_by_planar_coord() {
        let locations = to_map(vec![
            rack_at("A-1", 0.0, 0.0, 0.0),
            rack_at("A-2", 0.0, 0.0, 2.0),
            rack_at("A-3", 0.0, 0.0, 4.0),
            rack_at("B-1", 5.0, 0.0, 0.0),
        ]);

        let stacks = cluster_locations(&locations);
        assert_eq!(stacks.len(), 2);
        assert_eq!(stacks[0].ids, vec!["A-1", "A-2", "A-3"]);
        assert_eq!(stacks[1].ids, vec!["B-1"]);
        assert!(stacks[1].is_single());
    }

    #[test]
    fn test_stack_members_sorted_by_level() {
        // Insertion order must not leak into the stack order.
        let locations = to_map(vec![
            rack_at("TOP", 1.0, 1.0, 4.0),
            rack_at("BOTTOM", 1.0, 1.0, 0.0),
            rack_at("MID", 1.0, 1.0, 2.0),
        ]);

        let stacks = cluster_locations(&locations);
        assert_eq!(stacks[0].ids, vec!["BOTTOM", "MID", "TOP"]);
        assert_eq!(stacks[0].base(&locations).unwrap().id, "BOTTOM");
    }

    #[test]
    fn test_stack_heat() {
        let mut locations = to_map(vec![
            rack_at("A-1", 0.0, 0.0, 0.0),
            rack_at("A-2", 0.0, 0.0, 2.0),
        ]);
        locations.get_mut("A-1").unwrap().freq = 3.0;
        locations.get_mut("A-2").unwrap().freq = 5.0;

        let stacks = cluster_locations(&locations);
        assert_eq!(stacks[0].heat_at(&locations, 0), 3.0);
        assert_eq!(stacks[0].heat_at(&locations, 1), 5.0);
        assert_eq!(stacks[0].heat_at(&locations, 7), 0.0);
        assert_eq!(stacks[0].total_heat(&locations), 8.0);
    }
}

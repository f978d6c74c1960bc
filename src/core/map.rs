use crate::core::bounds::Bounds;
use crate::core::fit::{compute_fit, compute_fit_padded, FitResult};
use crate::data::inventory::{BalanceBook, Order};
use crate::data::location::Location;
use crate::plugins::heatmap;
use crate::spatial::clustering::{cluster_locations, LocationStack};
use crate::{MapError, Result};
use fxhash::FxHashMap;

/// The warehouse map: the location table plus the derived extents the
/// view layer needs.
///
/// Bounds and the level span are recomputed whenever the location table
/// is replaced, never on read.
#[derive(Debug, Clone, Default)]
pub struct WarehouseMap {
    locations: FxHashMap<String, Location>,
    bounds: Bounds,
    min_level: f64,
    max_level: f64,
}

impl WarehouseMap {
    /// Creates an empty map with zeroed extents
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map directly from a location table
    pub fn with_locations(locations: FxHashMap<String, Location>) -> Self {
        let mut map = Self::new();
        map.set_locations(locations);
        map
    }

    /// Replaces the location table and recomputes footprint bounds and
    /// the vertical level span.
    pub fn set_locations(&mut self, locations: FxHashMap<String, Location>) {
        self.locations = locations;

        if self.locations.is_empty() {
            self.bounds = Bounds::default();
            self.min_level = 0.0;
            self.max_level = 0.0;
        } else {
            self.bounds = Bounds::from_locations(self.locations.values());
            self.min_level = f64::INFINITY;
            self.max_level = f64::NEG_INFINITY;
            for loc in self.locations.values() {
                let (bottom, top) = loc.vertical_span();
                self.min_level = self.min_level.min(bottom);
                self.max_level = self.max_level.max(top);
            }
        }

        log::debug!(
            "map data set: {} locations, footprint {:.2}x{:.2}",
            self.locations.len(),
            self.bounds.width(),
            self.bounds.height()
        );
    }

    /// Gets the location table
    pub fn locations(&self) -> &FxHashMap<String, Location> {
        &self.locations
    }

    /// Looks up a location by id
    pub fn location(&self, id: &str) -> Result<&Location> {
        self.locations
            .get(id)
            .ok_or_else(|| MapError::UnknownLocation(id.to_string()))
    }

    /// Gets the floor footprint of all locations
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Gets the vertical extent as (bottom, top)
    pub fn level_span(&self) -> (f64, f64) {
        (self.min_level, self.max_level)
    }

    /// Gets the top of the highest location, the upper bound for level
    /// selection in the view layer.
    pub fn max_level(&self) -> f64 {
        self.max_level
    }

    /// Gets the number of locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the map holds no locations
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Computes the scale and margins that fit the map footprint into a
    /// viewport, with the default base padding.
    pub fn fit_view(&self, viewport_height: f64, viewport_width: f64) -> Result<FitResult> {
        compute_fit(viewport_height, viewport_width, &self.bounds)
    }

    /// Computes the fit with a caller-chosen base padding
    pub fn fit_view_padded(
        &self,
        viewport_height: f64,
        viewport_width: f64,
        padding: f64,
    ) -> Result<FitResult> {
        compute_fit_padded(viewport_height, viewport_width, &self.bounds, padding)
    }

    /// Groups locations sharing floor coordinates into stacks for the
    /// top-down view.
    pub fn stacks(&self) -> Vec<LocationStack> {
        cluster_locations(&self.locations)
    }

    /// Recomputes pick-frequency heat from the latest inventory balance
    /// and the given orders.
    pub fn update_frequencies(&mut self, balance: &BalanceBook, orders: &[Order]) {
        heatmap::compute_frequencies(&mut self.locations, balance, orders);
    }

    /// Gets the heat normalization ceiling
    pub fn max_heat(&self) -> f64 {
        heatmap::max_heat(&self.locations)
    }
}

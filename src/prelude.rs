//! Prelude module for common waremap types and functions
//!
//! Re-exports the most commonly used items for easy importing with
//! `use waremap::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    constants::DEFAULT_FIT_PADDING,
    fit::{compute_fit, compute_fit_padded, FitResult},
    geo::Point,
    map::WarehouseMap,
};

pub use crate::data::{
    inventory::{BalanceBook, Inventory, Order},
    location::{KindStyle, Location, LocationKind},
    units::{convert_dim, convert_weight},
};

pub use crate::plugins::heatmap::{compute_frequencies, max_heat, normalized_heat};

pub use crate::spatial::clustering::{cluster_locations, LocationStack};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

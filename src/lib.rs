//! # waremap
//!
//! Core data model and view-fitting engine for warehouse map visualization.
//!
//! This library provides the non-visual core of a warehouse map viewer:
//! the location model, planar bounds and viewport fitting, top-down
//! location stacking, and pick-frequency heat statistics. Rendering and
//! data import live in the embedding application.

pub mod core;
pub mod data;
pub mod plugins;
pub mod prelude;
pub mod spatial;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    fit::{compute_fit, compute_fit_padded, FitResult},
    geo::Point,
    map::WarehouseMap,
};

pub use crate::data::{
    inventory::{BalanceBook, Inventory, Order},
    location::{Location, LocationKind},
};

pub use crate::plugins::heatmap::{compute_frequencies, max_heat};

pub use crate::spatial::clustering::LocationStack;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("degenerate bounding box: width {width}, height {height}")]
    DegenerateBounds { width: f64, height: f64 },

    #[error("non-positive viewport: {height}x{width}")]
    NonPositiveViewport { height: f64, width: f64 },

    #[error("viewport {height}x{width} cannot hold 2x{padding} padding")]
    InsufficientViewport {
        height: f64,
        width: f64,
        padding: f64,
    },

    #[error("unknown unit of measure: {0}")]
    UnknownUnit(String),

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

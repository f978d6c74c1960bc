//! Engine-wide magic numbers kept in a single place.

/// Base margin (in viewport units) reserved on each side of the viewport
/// before a map is scaled to fit.
pub const DEFAULT_FIT_PADDING: f64 = 20.0;

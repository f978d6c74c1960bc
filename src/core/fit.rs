//! Scales a map footprint into a fixed viewport.
//!
//! The viewer reserves a base margin on every side, scales the footprint
//! uniformly so it fits both axes, and splits the leftover space on the
//! slack axis evenly to center the content.

use crate::core::bounds::Bounds;
use crate::core::constants::DEFAULT_FIT_PADDING;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Uniform scale factor plus centering margins for drawing a map
/// inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Uniform scale factor from floor units to viewport units
    pub coef: f64,
    /// Left/right margin in viewport units
    pub padding_x: f64,
    /// Top/bottom margin in viewport units
    pub padding_y: f64,
}

/// Computes the scale and margins that fit `bounds` into a viewport,
/// reserving the default base padding on each side.
///
/// The constraining axis keeps the base padding; the other axis gets the
/// leftover space split evenly. Aspect ratio is always preserved.
pub fn compute_fit(
    viewport_height: f64,
    viewport_width: f64,
    bounds: &Bounds,
) -> Result<FitResult> {
    compute_fit_padded(viewport_height, viewport_width, bounds, DEFAULT_FIT_PADDING)
}

/// Computes the fit with a caller-chosen base padding.
///
/// Inputs are validated eagerly: the bounds must have positive extent on
/// both axes, the padding must not be negative, and the viewport must be
/// strictly larger than twice the padding in each dimension, otherwise
/// the scale factor or a margin would not be positive.
pub fn compute_fit_padded(
    viewport_height: f64,
    viewport_width: f64,
    bounds: &Bounds,
    padding: f64,
) -> Result<FitResult> {
    if viewport_height <= 0.0 || viewport_width <= 0.0 {
        return Err(MapError::NonPositiveViewport {
            height: viewport_height,
            width: viewport_width,
        });
    }
    if bounds.is_degenerate() {
        return Err(MapError::DegenerateBounds {
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    if padding < 0.0 || viewport_height <= 2.0 * padding || viewport_width <= 2.0 * padding {
        return Err(MapError::InsufficientViewport {
            height: viewport_height,
            width: viewport_width,
            padding,
        });
    }

    let mut padding_x = padding;
    let mut padding_y = padding;

    let width = bounds.width();
    let height = bounds.height();

    let coef_x = (viewport_width - 2.0 * padding_x) / width;
    let coef_y = (viewport_height - 2.0 * padding_y) / height;

    // Strict comparison: a tie keeps the vertical branch, which leaves
    // both paddings recomputable to the same value anyway.
    let coef = if coef_x < coef_y {
        padding_y = (viewport_height - coef_x * height) / 2.0;
        coef_x
    } else {
        padding_x = (viewport_width - coef_y * width) / 2.0;
        coef_y
    };

    Ok(FitResult {
        coef,
        padding_x,
        padding_y,
    })
}

//! Unit-of-measure normalization for source data.
//!
//! Dimensions are stored in meters and weights in kilograms; source
//! sheets may carry them in any of the supported units.

use crate::{MapError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DIM_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("m", 1.0),
        ("meters", 1.0),
        ("dm", 0.1),
        ("cm", 0.01),
        ("mm", 0.001),
    ])
});

static WEIGHT_FACTORS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("kg", 1.0), ("g", 0.001)]));

/// Converts a dimension to meters. `None` as unit means the value is
/// already in meters.
pub fn convert_dim(dim: f64, uom: Option<&str>) -> Result<f64> {
    match uom {
        Some(unit) => {
            let factor = DIM_FACTORS
                .get(unit.to_lowercase().as_str())
                .ok_or_else(|| MapError::UnknownUnit(unit.to_string()))?;
            Ok(dim * factor)
        }
        None => Ok(dim),
    }
}

/// Converts a weight to kilograms. `None` as unit means the value is
/// already in kilograms.
pub fn convert_weight(weight: f64, uom: Option<&str>) -> Result<f64> {
    match uom {
        Some(unit) => {
            let factor = WEIGHT_FACTORS
                .get(unit.to_lowercase().as_str())
                .ok_or_else(|| MapError::UnknownUnit(unit.to_string()))?;
            Ok(weight * factor)
        }
        None => Ok(weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_conversion() {
        assert_eq!(convert_dim(1200.0, Some("mm")).unwrap(), 1.2);
        assert_eq!(convert_dim(80.0, Some("CM")).unwrap(), 0.8);
        assert_eq!(convert_dim(2.5, Some("m")).unwrap(), 2.5);
        assert_eq!(convert_dim(2.5, None).unwrap(), 2.5);
    }

    #[test]
    fn test_weight_conversion() {
        assert_eq!(convert_weight(500.0, Some("g")).unwrap(), 0.5);
        assert_eq!(convert_weight(120.0, Some("kg")).unwrap(), 120.0);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = convert_dim(1.0, Some("furlong")).unwrap_err();
        assert!(matches!(err, MapError::UnknownUnit(_)));
    }
}

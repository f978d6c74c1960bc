use crate::core::bounds::Bounds;
use crate::core::geo::Point;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category of a warehouse location, driving display style and storage
/// semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Floor,
    Rack,
    Wall,
    InboundDoor,
    OutboundDoor,
    StagingArea,
    Custom,
}

/// Display colors associated with a location kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub color: &'static str,
    pub gray_color: &'static str,
}

static KIND_STYLES: Lazy<HashMap<LocationKind, KindStyle>> = Lazy::new(|| {
    HashMap::from([
        (
            LocationKind::Floor,
            KindStyle {
                color: "gray",
                gray_color: "gray",
            },
        ),
        (
            LocationKind::Rack,
            KindStyle {
                color: "green",
                gray_color: "gray",
            },
        ),
        (
            LocationKind::Wall,
            KindStyle {
                color: "black",
                gray_color: "black",
            },
        ),
        (
            LocationKind::InboundDoor,
            KindStyle {
                color: "blue",
                gray_color: "#222",
            },
        ),
        (
            LocationKind::OutboundDoor,
            KindStyle {
                color: "orange",
                gray_color: "#aaa",
            },
        ),
        (
            LocationKind::StagingArea,
            KindStyle {
                color: "yellow",
                gray_color: "#ddd",
            },
        ),
        (
            LocationKind::Custom,
            KindStyle {
                color: "red",
                gray_color: "white",
            },
        ),
    ])
});

impl LocationKind {
    /// Parses a kind from the loose spellings found in source data.
    ///
    /// Case and surrounding/inner whitespace are normalized; anything
    /// unrecognized falls back to `Custom`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        match normalized.as_str() {
            "floor" => Self::Floor,
            "rack" | "storage rack" => Self::Rack,
            "wall" => Self::Wall,
            "inbound door" => Self::InboundDoor,
            "outbound door" => Self::OutboundDoor,
            "staging area" => Self::StagingArea,
            _ => Self::Custom,
        }
    }

    /// Gets the display style for this kind
    pub fn style(&self) -> &'static KindStyle {
        &KIND_STYLES[self]
    }

    /// Whether locations of this kind hold inventory
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Rack)
    }
}

/// A single physical location in the warehouse.
///
/// Dimensions are in meters: `width` spans the x axis, `length` the
/// y axis and `height` the z axis. `freq` accumulates pick frequency
/// for heat-map display and starts at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub kind: LocationKind,
    pub lclass: Option<String>,
    pub lsubclass: Option<String>,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub max_weight: Option<f64>,
    pub zone: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub freq: f64,
}

impl Location {
    /// Creates a location with dimensions; coordinates default to the
    /// origin until assigned from the coordinate sheet.
    pub fn new(
        id: impl Into<String>,
        kind: LocationKind,
        length: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            lclass: None,
            lsubclass: None,
            length,
            width,
            height,
            max_weight: None,
            zone: None,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            freq: 0.0,
        }
    }

    /// Sets the classification strings
    pub fn with_class(mut self, lclass: impl Into<String>, lsubclass: impl Into<String>) -> Self {
        self.lclass = Some(lclass.into());
        self.lsubclass = Some(lsubclass.into());
        self
    }

    /// Sets the zone name
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Sets the maximum weight the location can hold (kilograms)
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Additionally set coordinates of the location
    pub fn set_coord(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Gets the planar coordinates (used for the top-down view)
    pub fn planar_coord(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Gets the floor rectangle occupied by this location
    pub fn footprint(&self) -> Bounds {
        Bounds::from_coords(self.x, self.y, self.x + self.width, self.y + self.length)
    }

    /// Gets the vertical extent as (bottom, top)
    pub fn vertical_span(&self) -> (f64, f64) {
        (self.z, self.z + self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_loose_names() {
        assert_eq!(LocationKind::from_name("Rack"), LocationKind::Rack);
        assert_eq!(LocationKind::from_name("Storage  Rack"), LocationKind::Rack);
        assert_eq!(
            LocationKind::from_name("INBOUND DOOR"),
            LocationKind::InboundDoor
        );
        assert_eq!(
            LocationKind::from_name("conveyor"),
            LocationKind::Custom
        );
    }

    #[test]
    fn test_kind_styles() {
        assert_eq!(LocationKind::Rack.style().color, "green");
        assert_eq!(LocationKind::Wall.style().gray_color, "black");
        assert!(LocationKind::Rack.is_storage());
        assert!(!LocationKind::Floor.is_storage());
    }

    #[test]
    fn test_footprint_and_span() {
        let mut loc = Location::new("R-01-01", LocationKind::Rack, 1.2, 0.8, 2.0);
        loc.set_coord(4.0, 6.0, 1.0);

        let fp = loc.footprint();
        assert_eq!(fp.min, Point::new(4.0, 6.0));
        assert_eq!(fp.max, Point::new(4.8, 7.2));
        assert_eq!(loc.vertical_span(), (1.0, 3.0));
    }

    #[test]
    fn test_location_serializes() {
        let loc = Location::new("D-01", LocationKind::InboundDoor, 2.0, 2.0, 3.0)
            .with_zone("INBOUND");
        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("\"inbound_door\""));
        assert!(json.contains("\"INBOUND\""));
    }
}

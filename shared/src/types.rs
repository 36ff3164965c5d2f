//! Common types used across the platform

use serde::Deserialize;

/// A `[longitude, latitude]` pair
pub type Position = [f64; 2];

/// Ordered sequence of positions forming a polygon boundary
pub type Ring = Vec<Position>;

/// Smallest ring that still describes an area
pub const MIN_RING_POINTS: usize = 3;

/// GeoJSON geometry as returned by upstream geospatial services
///
/// Only the polygonal shapes carry an outline we can draw. Every other
/// geometry type deserializes to [`Geometry::Unsupported`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Parse a raw GeoJSON geometry, treating anything malformed as unsupported
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or(Geometry::Unsupported)
    }

    /// Extract the outer ring used for display
    ///
    /// Polygon yields its first ring, MultiPolygon the first ring of its first
    /// polygon. Returns `None` for other shapes, for positions with fewer than
    /// two ordinates, and for rings shorter than [`MIN_RING_POINTS`].
    pub fn outer_ring(&self) -> Option<Ring> {
        let raw = match self {
            Geometry::Polygon { coordinates } => coordinates.first()?,
            Geometry::MultiPolygon { coordinates } => coordinates.first()?.first()?,
            Geometry::Unsupported => return None,
        };

        let ring = raw
            .iter()
            .map(|position| match position.as_slice() {
                [lon, lat, ..] => Some([*lon, *lat]),
                _ => None,
            })
            .collect::<Option<Ring>>()?;

        (ring.len() >= MIN_RING_POINTS).then_some(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn polygon_takes_outer_ring() {
        let geometry = Geometry::from_value(json!({
            "type": "Polygon",
            "coordinates": [
                [[-97.0, 35.0], [-96.0, 35.0], [-96.0, 36.0], [-97.0, 35.0]],
                [[-96.8, 35.2], [-96.5, 35.2], [-96.5, 35.5]]
            ]
        }));

        let ring = geometry.outer_ring().unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], [-97.0, 35.0]);
    }

    #[test]
    fn multipolygon_takes_first_polygon() {
        let geometry = Geometry::from_value(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[-90.0, 30.0], [-89.0, 30.0], [-89.0, 31.0]]],
                [[[-80.0, 40.0], [-79.0, 40.0], [-79.0, 41.0]]]
            ]
        }));

        let ring = geometry.outer_ring().unwrap();
        assert_eq!(ring, vec![[-90.0, 30.0], [-89.0, 30.0], [-89.0, 31.0]]);
    }

    #[test]
    fn altitude_is_discarded() {
        let geometry = Geometry::from_value(json!({
            "type": "Polygon",
            "coordinates": [[[-97.0, 35.0, 120.0], [-96.0, 35.0, 80.0], [-96.0, 36.0, 0.0]]]
        }));

        assert_eq!(
            geometry.outer_ring().unwrap(),
            vec![[-97.0, 35.0], [-96.0, 35.0], [-96.0, 36.0]]
        );
    }

    #[test]
    fn short_ring_is_dropped() {
        let geometry = Geometry::from_value(json!({
            "type": "Polygon",
            "coordinates": [[[-97.0, 35.0], [-96.0, 35.0]]]
        }));

        assert_eq!(geometry.outer_ring(), None);
    }

    #[test]
    fn other_shapes_yield_nothing() {
        let point = Geometry::from_value(json!({"type": "Point", "coordinates": [-97.0, 35.0]}));
        assert_eq!(point, Geometry::Unsupported);
        assert_eq!(point.outer_ring(), None);

        let line = Geometry::from_value(json!({
            "type": "LineString",
            "coordinates": [[-97.0, 35.0], [-96.0, 35.0], [-95.0, 35.0]]
        }));
        assert_eq!(line.outer_ring(), None);
    }

    #[test]
    fn malformed_geometry_is_unsupported() {
        assert_eq!(Geometry::from_value(json!(null)), Geometry::Unsupported);
        assert_eq!(
            Geometry::from_value(json!({"type": "Polygon", "coordinates": "nope"})),
            Geometry::Unsupported
        );
        assert_eq!(
            Geometry::from_value(json!({"type": "Polygon", "coordinates": []})).outer_ring(),
            None
        );
    }
}

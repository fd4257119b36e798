//! Geodesic helpers and GeoJSON export.

use ::geo::HaversineDistance;
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

use crate::{types::LatLon, RuntimeTrack};

/// Great-circle distance in meters between two positions.
pub fn distance(a: LatLon, b: LatLon) -> f64 {
    let a: ::geo::Point = a.into();
    let b: ::geo::Point = b.into();
    a.haversine_distance(&b)
}

impl RuntimeTrack {
    /// Track as a GeoJSON feature with a 3D `LineString` geometry
    /// (`[lon, lat, alt]` per fix).
    pub fn to_geojson(&self) -> Feature {
        let coordinates = self
            .lat
            .iter()
            .zip(&self.lon)
            .zip(&self.alt)
            .map(|((lat, lon), alt)| vec![*lon, *lat, *alt])
            .collect::<Vec<_>>();

        let mut properties = JsonObject::new();
        properties.insert("id".to_owned(), JsonValue::from(self.id.as_str()));
        properties.insert("name".to_owned(), JsonValue::from(self.name.as_str()));
        properties.insert("postProcessed".to_owned(), JsonValue::from(self.is_post_processed));
        properties.insert("startSec".to_owned(), JsonValue::from(self.extrema.time_sec.min));
        properties.insert("endSec".to_owned(), JsonValue::from(self.extrema.time_sec.max));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coordinates))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

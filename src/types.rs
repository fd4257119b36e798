/// Planar coordinate, used by renderers only.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geographic position in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Geographic position in degrees with altitude in meters.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLonZ {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl LatLonZ {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }
}

impl From<LatLonZ> for LatLon {
    fn from(value: LatLonZ) -> Self {
        Self {
            lat: value.lat,
            lon: value.lon,
        }
    }
}

impl From<LatLon> for ::geo::Point {
    fn from(value: LatLon) -> Self {
        // geo is x/y, i.e. lon/lat
        ::geo::Point::new(value.lon, value.lat)
    }
}

//! Records as handed over by the deserialization layer, i.e. arrays still
//! differentially encoded.

use crate::{
    config::DecoderConfig,
    errors::{Result, TrackError},
};

/// One differentially encoded trajectory.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedTrack {
    /// Pilot or track name.
    pub name: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub alt: Vec<f64>,
    pub time_sec: Vec<f64>,
}

/// Decoded trajectory. All arrays have the same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trajectory {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub alt: Vec<f64>,
    pub time_sec: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }
}

impl EncodedTrack {
    /// Number of fixes, going by `lat`.
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Encodes decoded arrays, the inverse of [`EncodedTrack::decode`].
    pub fn encode(name: &str, trajectory: &Trajectory, config: &DecoderConfig) -> Self {
        Self {
            name: name.to_owned(),
            lat: config.coordinate.encode(&trajectory.lat),
            lon: config.coordinate.encode(&trajectory.lon),
            alt: config.altitude.encode(&trajectory.alt),
            time_sec: config.time.encode(&trajectory.time_sec),
        }
    }

    /// Decodes all arrays. Errors if they differ in length.
    pub fn decode(&self, config: &DecoderConfig) -> Result<Trajectory> {
        let expected = self.lat.len();
        for (field, got) in [
            ("lon", self.lon.len()),
            ("alt", self.alt.len()),
            ("time_sec", self.time_sec.len()),
        ] {
            if got != expected {
                return Err(TrackError::LengthMismatch { field, expected, got });
            }
        }

        Ok(Trajectory {
            lat: config.coordinate.decode(&self.lat),
            lon: config.coordinate.decode(&self.lon),
            alt: config.altitude.decode(&self.alt),
            time_sec: config.time.decode(&self.time_sec),
        })
    }
}

/// Ground elevation per fix, differentially encoded.
/// `altitudes` is missing when the elevation service had no data.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedGroundAltitude {
    pub altitudes: Option<Vec<f64>>,
}

/// Airspace crossings for one track, as parallel arrays (one entry per
/// crossing). Only `start_sec` and `end_sec` are encoded.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedAirspaces {
    pub start_sec: Vec<f64>,
    /// Not ordered, deltas may be negative.
    pub end_sec: Vec<f64>,
    pub name: Vec<String>,
    pub category: Vec<String>,
    /// Upper limit, meters.
    pub top: Vec<f64>,
    /// Lower limit, meters.
    pub bottom: Vec<f64>,
    pub flags: Vec<u32>,
}

//! Airspace crossings overlay.

use time::OffsetDateTime;

use crate::codec::DeltaCodec;

use super::{runtime_track::unix_to_datetime, EncodedAirspaces, RuntimeTrack};

/// Decoded airspace crossings, as parallel arrays.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airspaces {
    /// Entry time, Unix seconds.
    pub start_sec: Vec<f64>,
    /// Exit time, Unix seconds.
    pub end_sec: Vec<f64>,
    pub name: Vec<String>,
    pub category: Vec<String>,
    /// Upper limit, meters.
    pub top: Vec<f64>,
    /// Lower limit, meters.
    pub bottom: Vec<f64>,
    pub flags: Vec<u32>,
}

/// A single crossing, borrowed from [`Airspaces`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirspaceCrossing<'a> {
    pub start_sec: f64,
    pub end_sec: f64,
    pub name: &'a str,
    pub category: &'a str,
    pub top: f64,
    pub bottom: f64,
    pub flags: u32,
}

impl AirspaceCrossing<'_> {
    pub fn duration_sec(&self) -> f64 {
        self.end_sec - self.start_sec
    }

    /// `true` if inside the airspace at `time_sec`.
    pub fn contains(&self, time_sec: f64) -> bool {
        time_sec >= self.start_sec && time_sec <= self.end_sec
    }

    pub fn entered(&self) -> Option<OffsetDateTime> {
        unix_to_datetime(self.start_sec)
    }

    pub fn exited(&self) -> Option<OffsetDateTime> {
        unix_to_datetime(self.end_sec)
    }
}

impl Airspaces {
    /// Decodes entry and exit times. Other fields are copied.
    pub fn decode(encoded: &EncodedAirspaces, codec: &DeltaCodec) -> Self {
        Self {
            start_sec: codec.decode(&encoded.start_sec),
            end_sec: codec.decode(&encoded.end_sec),
            name: encoded.name.to_owned(),
            category: encoded.category.to_owned(),
            top: encoded.top.to_owned(),
            bottom: encoded.bottom.to_owned(),
            flags: encoded.flags.to_owned(),
        }
    }

    /// Number of complete crossings, i.e. the length of the shortest array.
    pub fn len(&self) -> usize {
        [
            self.start_sec.len(),
            self.end_sec.len(),
            self.name.len(),
            self.category.len(),
            self.top.len(),
            self.bottom.len(),
            self.flags.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = AirspaceCrossing<'_>> {
        (0..self.len()).map(|i| AirspaceCrossing {
            start_sec: self.start_sec[i],
            end_sec: self.end_sec[i],
            name: &self.name[i],
            category: &self.category[i],
            top: self.top[i],
            bottom: self.bottom[i],
            flags: self.flags[i],
        })
    }

    /// Crossings active at `time_sec`.
    pub fn at(&self, time_sec: f64) -> impl Iterator<Item = AirspaceCrossing<'_>> {
        self.iter().filter(move |a| a.contains(time_sec))
    }
}

impl RuntimeTrack {
    /// Decodes and attaches airspace crossings with the default codec.
    pub fn merge_airspaces(&mut self, encoded: &EncodedAirspaces) {
        self.merge_airspaces_with(encoded, &DeltaCodec::AIRSPACE_TIME)
    }

    pub fn merge_airspaces_with(&mut self, encoded: &EncodedAirspaces, codec: &DeltaCodec) {
        self.airspaces = Some(Airspaces::decode(encoded, codec));
    }
}

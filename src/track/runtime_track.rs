//! Fully materialized track, ready for rendering.

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

use crate::{
    config::DecoderConfig,
    errors::{Result, TrackError},
    kinematics::{horizontal_speed, vertical_speed, Extent},
    types::LatLonZ,
};

use super::{Airspaces, EncodedTrack};

/// Per-series extrema.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrema {
    /// Altitude, meters.
    pub alt: Extent,
    pub lat: Extent,
    pub lon: Extent,
    /// Fix time, seconds.
    pub time_sec: Extent,
    /// Horizontal speed, km/h.
    pub vx: Extent,
    /// Vertical speed, m/s.
    pub vz: Extent,
    /// Longest distance between two consecutive fixes, meters.
    pub max_distance: f64,
}

/// Decoded track with derived series.
///
/// All series have the trajectory length `N`.
/// `gnd_alt` stays zero-filled unless a ground altitude overlay is merged.
/// `heading` (zero-filled) and `look_at_lat`/`look_at_lon` (copies of
/// `lat`/`lon`) are placeholders that a downstream process may replace via
/// [`RuntimeTrack::set_heading`] and [`RuntimeTrack::set_look_at`].
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeTrack {
    /// `{groupId}-{index}`, see [`crate::TrackId`].
    pub id: String,
    /// Pilot or track name.
    pub name: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Altitude, meters.
    pub alt: Vec<f64>,
    /// Fix time, Unix seconds.
    pub time_sec: Vec<f64>,
    /// Horizontal speed, km/h.
    pub vx: Vec<f64>,
    /// Vertical speed, m/s.
    pub vz: Vec<f64>,
    /// Ground elevation, meters.
    pub gnd_alt: Vec<f64>,
    /// Heading, degrees.
    pub heading: Vec<f64>,
    pub look_at_lat: Vec<f64>,
    pub look_at_lon: Vec<f64>,
    pub extrema: Extrema,
    /// `true` if the server ran at least one post-processing pass.
    pub is_post_processed: bool,
    pub airspaces: Option<Airspaces>,
}

impl RuntimeTrack {
    /// Assembles a track with the default [`DecoderConfig`].
    pub fn new(id: &str, track: &EncodedTrack, is_post_processed: bool) -> Result<Self> {
        Self::assemble(id, track, is_post_processed, &DecoderConfig::default())
    }

    /// Decodes `track`, derives speeds and computes extrema.
    /// Errors if the encoded arrays differ in length.
    pub fn assemble(
        id: &str,
        track: &EncodedTrack,
        is_post_processed: bool,
        config: &DecoderConfig,
    ) -> Result<Self> {
        let trajectory = track.decode(config)?;
        let len = trajectory.len();

        let hs = horizontal_speed(
            &trajectory.lat,
            &trajectory.lon,
            &trajectory.time_sec,
            &config.horizontal,
            config.window_mode,
        );
        let vz = vertical_speed(
            &trajectory.alt,
            &trajectory.time_sec,
            &config.vertical,
            config.window_mode,
        );

        let extrema = Extrema {
            alt: Extent::from_values(&trajectory.alt),
            lat: Extent::from_values(&trajectory.lat),
            lon: Extent::from_values(&trajectory.lon),
            time_sec: Extent::from_values(&trajectory.time_sec),
            vx: Extent::from_values(&hs.speed),
            vz: Extent::from_values(&vz),
            max_distance: Extent::from_values(&hs.step_distance).max,
        };

        tracing::trace!(id, len, ?extrema, "assembled track");

        Ok(Self {
            id: id.to_owned(),
            name: track.name.to_owned(),
            look_at_lat: trajectory.lat.to_owned(),
            look_at_lon: trajectory.lon.to_owned(),
            lat: trajectory.lat,
            lon: trajectory.lon,
            alt: trajectory.alt,
            time_sec: trajectory.time_sec,
            vx: hs.speed,
            vz,
            gnd_alt: vec![0.0; len],
            heading: vec![0.0; len],
            extrema,
            is_post_processed,
            airspaces: None,
        })
    }

    /// Number of fixes.
    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }

    fn check_len(&self, field: &'static str, got: usize) -> Result<()> {
        match got == self.len() {
            true => Ok(()),
            false => Err(TrackError::LengthMismatch {
                field,
                expected: self.len(),
                got,
            }),
        }
    }

    /// Replaces the heading placeholder.
    pub fn set_heading(&mut self, heading: Vec<f64>) -> Result<()> {
        self.check_len("heading", heading.len())?;
        self.heading = heading;
        Ok(())
    }

    /// Replaces the camera look-at placeholders, e.g. with smoothed positions.
    pub fn set_look_at(&mut self, lat: Vec<f64>, lon: Vec<f64>) -> Result<()> {
        self.check_len("look_at_lat", lat.len())?;
        self.check_len("look_at_lon", lon.len())?;
        self.look_at_lat = lat;
        self.look_at_lon = lon;
        Ok(())
    }

    /// Index of the last fix at or before `time_sec`, clamped to the first fix.
    /// `None` for an empty track.
    pub fn index_at(&self, time_sec: f64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let after = self.time_sec.partition_point(|&t| t <= time_sec);
        Some(after.saturating_sub(1))
    }

    /// Position at `time_sec`, linearly interpolated between the fixes
    /// around it. Clamped to the first and last fix.
    pub fn fix_at(&self, time_sec: f64) -> Option<LatLonZ> {
        let i = self.index_at(time_sec)?;
        let fix = |i: usize| LatLonZ::new(self.lat[i], self.lon[i], self.alt[i]);
        if i + 1 >= self.len() || time_sec <= self.time_sec[i] {
            return Some(fix(i));
        }

        let span = self.time_sec[i + 1] - self.time_sec[i];
        let ratio = match span > 0.0 {
            true => (time_sec - self.time_sec[i]) / span,
            false => 0.0,
        };
        let lerp = |a: f64, b: f64| a + (b - a) * ratio;
        let (a, b) = (fix(i), fix(i + 1));

        Some(LatLonZ::new(
            lerp(a.lat, b.lat),
            lerp(a.lon, b.lon),
            lerp(a.alt, b.alt),
        ))
    }

    /// Time of the earliest fix. `None` for an empty track.
    pub fn start(&self) -> Option<OffsetDateTime> {
        match self.is_empty() {
            true => None,
            false => unix_to_datetime(self.extrema.time_sec.min),
        }
    }

    /// Time of the latest fix. `None` for an empty track.
    pub fn end(&self) -> Option<OffsetDateTime> {
        match self.is_empty() {
            true => None,
            false => unix_to_datetime(self.extrema.time_sec.max),
        }
    }

    /// Time between the earliest and latest fix.
    /// `None` for an empty track or times outside the supported date range.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.end()? - self.start()?)
    }

    /// Start time as an RFC 3339 string.
    pub fn start_as_string(&self) -> Option<String> {
        self.start().and_then(|t| t.format(&Rfc3339).ok())
    }
}

pub(crate) fn unix_to_datetime(sec: f64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos((sec * 1e9).round() as i128).ok()
}

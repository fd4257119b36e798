//! Delta encoding with optional quantization.
//!
//! Values are scaled (and optionally rounded) first, then each element is
//! stored as the difference to its scaled predecessor. The first element is
//! stored as-is (delta to zero). Quantizing before differencing means
//! rounding errors never accumulate: every decoded value stays within half a
//! quantization step (`0.5 / scale`) of its original.
//!
//! ```rs
//! use trackgroup_rs::codec::{encode, decode};
//!
//! let lat = [45.12345, 45.12350, 45.12341];
//! let deltas = encode(&lat, 1e5, true); // [4512345, 5, -9]
//! let decoded = decode(&deltas, 1e5);
//! ```

use crate::{
    constants::{ALTITUDE_SCALE, COORDINATE_SCALE, TIME_SCALE},
    errors::{Result, TrackError},
};

use super::round_half_up;

/// Whether stored deltas may be negative.
///
/// Only affects integer transport packing (see [`DeltaCodec::pack`]).
/// `encode`/`decode` accept negative deltas regardless, since a series that
/// is increasing "by construction" is never guaranteed to be by the codec.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// ZigZag packed, for unordered series such as airspace exit times.
    #[default]
    Signed,
    /// Packed as-is, for non-decreasing series such as fix times.
    Unsigned,
}

/// Encodes `values` into deltas of `scale`d values,
/// rounded to the nearest integer if `round` is `true`.
pub fn encode(values: &[f64], scale: f64, round: bool) -> Vec<f64> {
    let mut previous = 0.0;
    values
        .iter()
        .map(|v| {
            let scaled = match round {
                true => round_half_up(v * scale),
                false => v * scale,
            };
            let delta = scaled - previous;
            previous = scaled;
            delta
        })
        .collect()
}

/// Decodes deltas produced by [`encode`]: running sum of all deltas up to and
/// including each index, divided by `scale`.
pub fn decode(deltas: &[f64], scale: f64) -> Vec<f64> {
    let mut sum = 0.0;
    deltas
        .iter()
        .map(|delta| {
            sum += delta;
            sum / scale
        })
        .collect()
}

/// Codec parameters for one kind of series.
/// Built via [`DeltaCodec::new`] or the presets, so `scale` is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeltaCodec {
    pub(crate) scale: f64,
    pub(crate) round: bool,
    pub(crate) sign: Sign,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DeltaCodec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            scale: f64,
            round: bool,
            sign: Sign,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.scale, raw.round, raw.sign).map_err(serde::de::Error::custom)
    }
}

impl Default for DeltaCodec {
    fn default() -> Self {
        Self {
            scale: 1.0,
            round: true,
            sign: Sign::Signed,
        }
    }
}

impl DeltaCodec {
    /// Latitude, longitude.
    pub const COORDINATE: Self = Self {
        scale: COORDINATE_SCALE,
        round: true,
        sign: Sign::Signed,
    };
    /// Fix and ground altitudes.
    pub const ALTITUDE: Self = Self {
        scale: ALTITUDE_SCALE,
        round: true,
        sign: Sign::Signed,
    };
    /// Fix times. Sub-second precision is kept.
    pub const TIME: Self = Self {
        scale: TIME_SCALE,
        round: false,
        sign: Sign::Unsigned,
    };
    /// Airspace entry/exit times. Exit times are not ordered.
    pub const AIRSPACE_TIME: Self = Self {
        scale: TIME_SCALE,
        round: true,
        sign: Sign::Signed,
    };

    /// New codec. `scale` must be finite and non-zero.
    pub fn new(scale: f64, round: bool, sign: Sign) -> Result<Self> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(TrackError::InvalidScale(scale));
        }
        Ok(Self { scale, round, sign })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `true` if scaled values are rounded to integers.
    pub fn round(&self) -> bool {
        self.round
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn encode(&self, values: &[f64]) -> Vec<f64> {
        encode(values, self.scale, self.round)
    }

    pub fn decode(&self, deltas: &[f64]) -> Vec<f64> {
        decode(deltas, self.scale)
    }
}

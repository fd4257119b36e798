//! Decoding parameters. [`DecoderConfig::default`] matches the encoding
//! used by the track server.

use crate::{
    codec::DeltaCodec,
    kinematics::{SpeedWindow, WindowMode},
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    /// Latitude and longitude.
    pub coordinate: DeltaCodec,
    /// Fix altitude and ground altitude.
    pub altitude: DeltaCodec,
    /// Fix time.
    pub time: DeltaCodec,
    /// Airspace entry and exit times.
    pub airspace_time: DeltaCodec,
    /// Horizontal speed window.
    pub horizontal: SpeedWindow,
    /// Vertical speed window.
    pub vertical: SpeedWindow,
    pub window_mode: WindowMode,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            coordinate: DeltaCodec::COORDINATE,
            altitude: DeltaCodec::ALTITUDE,
            time: DeltaCodec::TIME,
            airspace_time: DeltaCodec::AIRSPACE_TIME,
            horizontal: SpeedWindow::HORIZONTAL,
            vertical: SpeedWindow::VERTICAL,
            window_mode: WindowMode::LeadingStep,
        }
    }
}

impl DecoderConfig {
    /// Same as default, but with speed windows summing the
    /// following steps instead of repeating the leading one.
    pub fn forward_sum() -> Self {
        Self {
            window_mode: WindowMode::ForwardSum,
            ..Self::default()
        }
    }
}

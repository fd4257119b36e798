//! Windowed horizontal (km/h) and vertical (m/s) speed estimates.
//!
//! For each fix a window is accumulated forward, bounded both by a sample
//! count and by the time it spans, and speed is accumulated distance over
//! accumulated time. A window that accumulates no time yields `0`.
//!
//! With the default [`WindowMode::LeadingStep`] every window slot adds the
//! step *into* the fix at the window start (`step[i]`), not the following
//! steps. Output must stay compatible with already deployed renderers, so
//! the true forward sum is opt-in via [`WindowMode::ForwardSum`].

use crate::{
    codec::{round_half_up, round_to},
    constants::{
        HORIZONTAL_WINDOW_SAMPLES,
        HORIZONTAL_WINDOW_SECONDS,
        MS_TO_KMH,
        VERTICAL_WINDOW_SAMPLES,
        VERTICAL_WINDOW_SECONDS,
    },
    geo::distance,
    types::LatLon,
};

/// Bounds for one speed window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedWindow {
    /// Window slots are `1..max_samples`.
    pub max_samples: usize,
    /// Accumulation stops once the window spans more than this.
    pub max_seconds: f64,
}

impl SpeedWindow {
    pub const HORIZONTAL: Self = Self {
        max_samples: HORIZONTAL_WINDOW_SAMPLES,
        max_seconds: HORIZONTAL_WINDOW_SECONDS,
    };
    pub const VERTICAL: Self = Self {
        max_samples: VERTICAL_WINDOW_SAMPLES,
        max_seconds: VERTICAL_WINDOW_SECONDS,
    };
}

/// Which step each window slot accumulates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowMode {
    /// Slot `avg` of the window at `i` adds `step[i]`.
    #[default]
    LeadingStep,
    /// Slot `avg` of the window at `i` adds `step[i + avg]`.
    ForwardSum,
}

/// Horizontal speed together with the per-step distances it was derived from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HorizontalSpeed {
    /// Speed in km/h, rounded to integer.
    pub speed: Vec<f64>,
    /// Distance in meters from fix `i - 1` to fix `i`, `0` for the first fix.
    pub step_distance: Vec<f64>,
}

/// Differences between consecutive values, `0` for the first one.
pub fn step_deltas(values: &[f64]) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(values.len());
    if !values.is_empty() {
        deltas.push(0.0);
    }
    deltas.extend(values.windows(2).map(|w| w[1] - w[0]));
    deltas
}

/// Accumulates `(distance, seconds)` over the forward window of each index.
fn accumulate(
    steps: &[f64],
    delta_sec: &[f64],
    window: &SpeedWindow,
    mode: WindowMode,
) -> Vec<(f64, f64)> {
    let len = steps.len().min(delta_sec.len());
    (0..len)
        .map(|i| {
            let mut distance = 0.0;
            let mut seconds = 0.0;
            let mut avg = 1;
            while i + avg < len && avg < window.max_samples {
                let k = match mode {
                    WindowMode::LeadingStep => i,
                    WindowMode::ForwardSum => i + avg,
                };
                distance += steps[k];
                seconds += delta_sec[k];
                if seconds > window.max_seconds {
                    break;
                }
                avg += 1;
            }
            (distance, seconds)
        })
        .collect()
}

/// Horizontal speed with the haversine distance.
pub fn horizontal_speed(
    lat: &[f64],
    lon: &[f64],
    time_sec: &[f64],
    window: &SpeedWindow,
    mode: WindowMode,
) -> HorizontalSpeed {
    horizontal_speed_with(lat, lon, time_sec, window, mode, distance)
}

/// Horizontal speed in km/h, with `distance` returning meters between two
/// positions.
pub fn horizontal_speed_with<F>(
    lat: &[f64],
    lon: &[f64],
    time_sec: &[f64],
    window: &SpeedWindow,
    mode: WindowMode,
    distance: F,
) -> HorizontalSpeed
where
    F: Fn(LatLon, LatLon) -> f64,
{
    let len = lat.len().min(lon.len()).min(time_sec.len());
    let mut step_distance = Vec::with_capacity(len);
    if len > 0 {
        step_distance.push(0.0);
    }
    step_distance.extend((1..len).map(|i| {
        distance(
            LatLon::new(lat[i - 1], lon[i - 1]),
            LatLon::new(lat[i], lon[i]),
        )
    }));
    let delta_sec = step_deltas(&time_sec[..len]);

    let speed = accumulate(&step_distance, &delta_sec, window, mode)
        .into_iter()
        .map(|(meters, seconds)| match seconds > 0.0 {
            true => round_half_up(MS_TO_KMH * meters / seconds),
            false => 0.0,
        })
        .collect();

    HorizontalSpeed {
        speed,
        step_distance,
    }
}

/// Vertical speed in m/s, rounded to one decimal.
pub fn vertical_speed(
    alt: &[f64],
    time_sec: &[f64],
    window: &SpeedWindow,
    mode: WindowMode,
) -> Vec<f64> {
    let len = alt.len().min(time_sec.len());
    let step_alt = step_deltas(&alt[..len]);
    let delta_sec = step_deltas(&time_sec[..len]);

    accumulate(&step_alt, &delta_sec, window, mode)
        .into_iter()
        .map(|(meters, seconds)| match seconds > 0.0 {
            true => round_to(meters / seconds, 1),
            false => 0.0,
        })
        .collect()
}

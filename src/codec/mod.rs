//! Differential codec shared by every encoded series: coordinates,
//! altitudes, time, ground elevation and airspace entry/exit times.

pub mod delta;
pub mod pack;

pub use delta::{decode, encode, DeltaCodec, Sign};

/// Rounds half up (towards positive infinity), so that `-0.5` becomes `0`
/// and `0.5` becomes `1`, same as JavaScript `Math.round`.
/// `f64::round` rounds half away from zero instead.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact, unlike `value + 0.5` which may round up below the halfway point
    match value - floor >= 0.5 {
        true => floor + 1.0,
        false => floor,
    }
}

/// Rounds half up to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

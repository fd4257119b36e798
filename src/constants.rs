/// Scale applied to latitude and longitude before quantization,
/// i.e. coordinates travel as 1e-5 degree units (~1.1 m).
pub const COORDINATE_SCALE: f64 = 1e5;
/// Altitudes travel as whole meters.
pub const ALTITUDE_SCALE: f64 = 1.0;
/// Elapsed time travels as seconds.
pub const TIME_SCALE: f64 = 1.0;

/// m/s to km/h.
pub const MS_TO_KMH: f64 = 3.6;

/// Max number of samples in the horizontal speed window.
pub const HORIZONTAL_WINDOW_SAMPLES: usize = 65;
/// Horizontal speed window stops once it spans more than this many seconds.
pub const HORIZONTAL_WINDOW_SECONDS: f64 = 60.0;
/// Max number of samples in the vertical speed window.
pub const VERTICAL_WINDOW_SAMPLES: usize = 35;
/// Vertical speed window stops once it spans more than this many seconds.
pub const VERTICAL_WINDOW_SECONDS: f64 = 30.0;

/// Returned by `extract_group_id` when no group id can be found.
pub const INVALID_GROUP_ID: i64 = -1;

//! Speeds and extrema derived from decoded fixes.

pub mod extent;
pub mod speed;

pub use extent::Extent;
pub use speed::{
    horizontal_speed,
    horizontal_speed_with,
    step_deltas,
    vertical_speed,
    HorizontalSpeed,
    SpeedWindow,
    WindowMode,
};

//! Runtime tracks, assembled from encoded trajectories,
//! and the overlays merged into them.

pub mod airspace;
pub mod encoded;
pub mod ground;
pub mod runtime_track;

pub use airspace::{AirspaceCrossing, Airspaces};
pub use encoded::{EncodedAirspaces, EncodedGroundAltitude, EncodedTrack, Trajectory};
pub use runtime_track::{Extrema, RuntimeTrack};

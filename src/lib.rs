//! Decode differentially encoded GPS track groups into runtime tracks,
//! with derived horizontal and vertical speeds, extrema and merged
//! overlays (ground elevation, airspace crossings).
//!
//! Latitude, longitude, altitude and time travel as deltas of (optionally
//! quantized) values. Decoding reverses this, then adds the series the wire
//! format does not carry.
//!
//! ```rs
//! use trackgroup_rs::{decode_groups, TrackGroup, EncodedTrack};
//!
//! let group = TrackGroup {
//!     id: 42,
//!     num_post_process: 1,
//!     tracks: Some(vec![EncodedTrack {
//!         name: "pilot".to_owned(),
//!         lat: vec![4512345., 12., 9.],
//!         lon: vec![612345., -3., -8.],
//!         alt: vec![1500., 2., 3.],
//!         time_sec: vec![1700000000., 1., 1.],
//!     }]),
//!     ..Default::default()
//! };
//! let tracks = decode_groups(&[group]);
//! assert_eq!(tracks[0].id, "42-0");
//! ```

pub mod codec;
pub mod kinematics;
pub mod constants;
pub mod types;
mod config;
mod errors;
mod geo;
mod group;
mod track;

pub use codec::{DeltaCodec, Sign};
pub use config::DecoderConfig;
pub use errors::{Result, TrackError};
pub use self::geo::distance;
pub use group::{
    create_track_id,
    decode_groups,
    decode_groups_par,
    decode_groups_par_with,
    decode_groups_with,
    extract_group_id,
    TrackGroup,
    TrackId,
};
pub use kinematics::{Extent, SpeedWindow, WindowMode};
pub use track::{
    AirspaceCrossing,
    Airspaces,
    EncodedAirspaces,
    EncodedGroundAltitude,
    EncodedTrack,
    Extrema,
    RuntimeTrack,
    Trajectory,
};
pub use types::{LatLon, LatLonZ, Point};

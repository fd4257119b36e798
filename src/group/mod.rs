//! Batches of track groups and track identity.

pub mod decoder;
pub mod id;

pub use decoder::{
    decode_groups,
    decode_groups_par,
    decode_groups_par_with,
    decode_groups_with,
    TrackGroup,
};
pub use id::{create_track_id, extract_group_id, TrackId};

//! Decodes batches of track groups into a flat list of runtime tracks.
//!
//! Groups are independent of each other. Output order is group order,
//! then in-group index order, also for [`decode_groups_par`] and
//! [`decode_groups_par_with`].

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    config::DecoderConfig,
    track::{EncodedAirspaces, EncodedGroundAltitude, EncodedTrack, RuntimeTrack},
};

use super::create_track_id;

/// One group of tracks with optional overlays.
///
/// Overlays are matched to tracks by position: `ground_altitudes[i]` and
/// `airspaces[i]` belong to `tracks[i]`. Missing overlays are normal.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackGroup {
    /// Group id, used to compose track ids.
    pub id: i64,
    /// Number of post-processing passes run by the server.
    pub num_post_process: u32,
    pub tracks: Option<Vec<EncodedTrack>>,
    pub ground_altitudes: Option<Vec<EncodedGroundAltitude>>,
    pub airspaces: Option<Vec<EncodedAirspaces>>,
}

impl TrackGroup {
    pub fn is_post_processed(&self) -> bool {
        self.num_post_process > 0
    }

    /// Number of encoded tracks.
    pub fn len(&self) -> usize {
        self.tracks.as_ref().map_or(0, |t| t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assembles all tracks in the group and merges available overlays.
    ///
    /// A track whose own arrays differ in length is dropped.
    /// Its index is still consumed, so ids and overlays of the
    /// following tracks are unaffected.
    pub fn decode(&self, config: &DecoderConfig) -> Vec<RuntimeTrack> {
        let Some(tracks) = &self.tracks else {
            return Vec::new();
        };

        let runtime_tracks = tracks
            .iter()
            .enumerate()
            .filter_map(|(index, encoded)| {
                let id = create_track_id(self.id, index);
                let mut track = RuntimeTrack::assemble(
                    &id,
                    encoded,
                    self.is_post_processed(),
                    config,
                )
                .map_err(|err| tracing::warn!(id = id.as_str(), %err, "dropping malformed track"))
                .ok()?;

                if let Some(gnd) = self.ground_altitudes.as_ref().and_then(|g| g.get(index)) {
                    track.merge_ground_altitude_with(gnd, &config.altitude);
                }
                if let Some(airspaces) = self.airspaces.as_ref().and_then(|a| a.get(index)) {
                    track.merge_airspaces_with(airspaces, &config.airspace_time);
                }

                Some(track)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            group = self.id,
            tracks = runtime_tracks.len(),
            "decoded track group"
        );

        runtime_tracks
    }
}

/// Decodes all groups with the default [`DecoderConfig`].
pub fn decode_groups(groups: &[TrackGroup]) -> Vec<RuntimeTrack> {
    decode_groups_with(groups, &DecoderConfig::default())
}

pub fn decode_groups_with(groups: &[TrackGroup], config: &DecoderConfig) -> Vec<RuntimeTrack> {
    groups
        .iter()
        .flat_map(|group| group.decode(config))
        .collect()
}

/// Same as [`decode_groups`], with groups decoded on the rayon thread pool.
pub fn decode_groups_par(groups: &[TrackGroup]) -> Vec<RuntimeTrack> {
    decode_groups_par_with(groups, &DecoderConfig::default())
}

/// Same as [`decode_groups_with`], with groups decoded on the rayon thread pool.
pub fn decode_groups_par_with(groups: &[TrackGroup], config: &DecoderConfig) -> Vec<RuntimeTrack> {
    groups
        .par_iter()
        .map(|group| group.decode(config))
        .collect::<Vec<_>>() // Vec<Vec<RuntimeTrack>>, indexed collect keeps group order
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(lat: f64, len: usize) -> EncodedTrack {
        let mut track = EncodedTrack {
            name: format!("{lat}"),
            lat: vec![0.0; len],
            lon: vec![0.0; len],
            alt: vec![0.0; len],
            time_sec: vec![1.0; len],
        };
        if len > 0 {
            track.lat[0] = lat * 1e5;
            track.alt[0] = 1000.0;
        }
        track
    }

    #[test]
    fn ids_and_post_processing() {
        let group = TrackGroup {
            id: 12,
            num_post_process: 2,
            tracks: Some(vec![encoded(45.0, 3), encoded(46.0, 2)]),
            ..Default::default()
        };
        let tracks = group.decode(&DecoderConfig::default());
        let ids = tracks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["12-0", "12-1"]);
        assert!(tracks.iter().all(|t| t.is_post_processed));
        assert!(tracks.iter().all(|t| t.airspaces.is_none()));
    }

    #[test]
    fn missing_track_container() {
        let group = TrackGroup {
            id: 1,
            ..Default::default()
        };
        assert!(group.is_empty());
        assert!(group.decode(&DecoderConfig::default()).is_empty());
    }

    #[test]
    fn overlays_by_index() {
        let group = TrackGroup {
            id: 5,
            num_post_process: 0,
            tracks: Some(vec![encoded(45.0, 2), encoded(46.0, 3)]),
            // first overlay has the wrong length, second one matches
            ground_altitudes: Some(vec![
                EncodedGroundAltitude { altitudes: Some(vec![1.0]) },
                EncodedGroundAltitude { altitudes: Some(vec![500.0, 1.0, 1.0]) },
            ]),
            // only the first track has airspaces
            airspaces: Some(vec![EncodedAirspaces {
                start_sec: vec![10.0],
                end_sec: vec![20.0],
                name: vec!["TMA".to_owned()],
                category: vec!["D".to_owned()],
                top: vec![3000.0],
                bottom: vec![1000.0],
                flags: vec![0],
            }]),
        };
        let tracks = group.decode(&DecoderConfig::default());
        assert!(!tracks[0].is_post_processed);
        assert_eq!(tracks[0].gnd_alt, vec![0.0, 0.0]);
        assert_eq!(tracks[1].gnd_alt, vec![500.0, 501.0, 502.0]);
        assert!(tracks[0].airspaces.is_some());
        assert!(tracks[1].airspaces.is_none());
    }

    #[test]
    fn malformed_track_keeps_indices() {
        let mut broken = encoded(46.0, 3);
        broken.alt.pop();
        let group = TrackGroup {
            id: 9,
            num_post_process: 1,
            tracks: Some(vec![broken, encoded(47.0, 2)]),
            ground_altitudes: Some(vec![
                EncodedGroundAltitude::default(),
                EncodedGroundAltitude { altitudes: Some(vec![100.0, 0.0]) },
            ]),
            airspaces: None,
        };
        let tracks = group.decode(&DecoderConfig::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "9-1");
        assert_eq!(tracks[0].gnd_alt, vec![100.0, 100.0]);
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let groups = (0..20)
            .map(|g| TrackGroup {
                id: g,
                num_post_process: (g % 2) as u32,
                tracks: Some((0..(g as usize % 4)).map(|i| encoded(40.0 + i as f64, 5)).collect()),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let config = DecoderConfig::default();
        let sequential = decode_groups_with(&groups, &config);
        let parallel = decode_groups_par_with(&groups, &config);
        assert_eq!(sequential, parallel);
        assert_eq!(decode_groups(&groups), sequential);
        assert_eq!(decode_groups_par(&groups), sequential);
        assert_eq!(sequential.len(), groups.iter().map(|g| g.len()).sum::<usize>());
    }
}

//! Ground elevation overlay.

use crate::codec::DeltaCodec;

use super::{EncodedGroundAltitude, RuntimeTrack};

impl RuntimeTrack {
    /// Merges ground elevation with the default altitude codec.
    /// See [`RuntimeTrack::merge_ground_altitude_with`].
    pub fn merge_ground_altitude(&mut self, encoded: &EncodedGroundAltitude) -> bool {
        self.merge_ground_altitude_with(encoded, &DeltaCodec::ALTITUDE)
    }

    /// Decodes and replaces `gnd_alt` if altitudes are present and have the
    /// track length. Otherwise `gnd_alt` is left as is.
    /// Returns `true` if merged.
    pub fn merge_ground_altitude_with(
        &mut self,
        encoded: &EncodedGroundAltitude,
        codec: &DeltaCodec,
    ) -> bool {
        match &encoded.altitudes {
            Some(altitudes) if altitudes.len() == self.len() => {
                self.gnd_alt = codec.decode(altitudes);
                true
            }
            Some(altitudes) => {
                tracing::debug!(
                    id = self.id.as_str(),
                    expected = self.len(),
                    got = altitudes.len(),
                    "ground altitude length mismatch, skipping"
                );
                false
            }
            None => false,
        }
    }
}

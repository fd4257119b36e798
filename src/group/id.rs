//! Track ids are composed as `{groupId}-{indexInGroup}`.

use std::{fmt, str::FromStr};

use crate::{constants::INVALID_GROUP_ID, errors::TrackError};

/// Id of a track within a group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackId {
    pub group_id: i64,
    /// Index in group.
    pub index: usize,
}

impl TrackId {
    pub fn new(group_id: i64, index: usize) -> Self {
        Self { group_id, index }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.group_id, self.index)
    }
}

impl FromStr for TrackId {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackError::InvalidTrackId(s.to_owned());
        let (group_id, index) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            group_id: group_id.parse().map_err(|_| invalid())?,
            index: index.parse().map_err(|_| invalid())?,
        })
    }
}

/// Returns `{group_id}-{index}`.
pub fn create_track_id(group_id: i64, index: usize) -> String {
    TrackId::new(group_id, index).to_string()
}

/// Returns the group id from a track id, i.e. the leading digits when
/// followed by `-`. Returns `-1` if there are none.
/// Ids too large for `i64` saturate to `i64::MAX`.
pub fn extract_group_id(id: &str) -> i64 {
    let digits = id.bytes().take_while(u8::is_ascii_digit).count();
    match (digits, id.as_bytes().get(digits).copied()) {
        // only digits, so parsing fails on overflow alone
        (1.., Some(b'-')) => id[..digits].parse().unwrap_or(i64::MAX),
        _ => INVALID_GROUP_ID,
    }
}

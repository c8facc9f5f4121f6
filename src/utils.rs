use regex::Regex;

use crate::types::{PlaylistConfig, PlaylistItem, PrivateUser, SimplePlaylist, TimeRange};

/// Anchored pattern for the three managed playlist names.
const MANAGED_NAME_PATTERN: &str = "^Favorite (Short|Medium|Long) Term Tracks$";

/// Returns true if the name is one of the three managed playlists.
pub fn is_managed_playlist_name(name: &str) -> bool {
    Regex::new(MANAGED_NAME_PATTERN)
        .expect("managed name pattern must compile")
        .is_match(name)
}

/// Maps a managed playlist name to its time range. Returns `None` for any
/// name that is not exactly one of the three managed names.
pub fn time_range_for_name(name: &str) -> Option<TimeRange> {
    let re = Regex::new(MANAGED_NAME_PATTERN).expect("managed name pattern must compile");
    let caps = re.captures(name)?;
    match caps.get(1)?.as_str() {
        "Short" => Some(TimeRange::Short),
        "Medium" => Some(TimeRange::Medium),
        "Long" => Some(TimeRange::Long),
        _ => None,
    }
}

/// Builds the fill configuration for one managed playlist. Returns `None`
/// if the playlist name does not map to a time range.
pub fn playlist_config_for(playlist: &SimplePlaylist, user: &PrivateUser) -> Option<PlaylistConfig> {
    let time_range = time_range_for_name(&playlist.name)?;
    Some(PlaylistConfig {
        name: playlist.name.clone(),
        public: playlist.public.unwrap_or(false),
        description: playlist.description.clone().unwrap_or_default(),
        collaborative: playlist.collaborative,
        time_range,
        user_id: user.id.clone(),
        id: playlist.id.clone(),
    })
}

/// Collects the URIs of all tracks currently listed in a playlist, skipping
/// items whose track came back null.
pub fn track_uris(items: &[PlaylistItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(|track| track.uri.clone())
        .collect()
}

use toptracks::types::{PlaylistItem, PrivateUser, SimplePlaylist, TimeRange, Track};
use toptracks::utils::*;

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> SimplePlaylist {
    SimplePlaylist {
        id: id.to_string(),
        name: name.to_string(),
        description: Some("automated from toptracks".to_string()),
        public: Some(false),
        collaborative: false,
    }
}

// Helper function to create a test playlist item
fn create_test_item(id: &str, uri: &str) -> PlaylistItem {
    PlaylistItem {
        track: Some(Track {
            id: id.to_string(),
            name: format!("{}_name", id),
            uri: uri.to_string(),
        }),
    }
}

#[test]
fn test_managed_name_matches_exactly_three_names() {
    assert!(is_managed_playlist_name("Favorite Short Term Tracks"));
    assert!(is_managed_playlist_name("Favorite Medium Term Tracks"));
    assert!(is_managed_playlist_name("Favorite Long Term Tracks"));
}

#[test]
fn test_managed_name_rejects_variants() {
    // case and spelling variants
    assert!(!is_managed_playlist_name("favorite short term tracks"));
    assert!(!is_managed_playlist_name("Favorite Short Term Track"));
    assert!(!is_managed_playlist_name("Favorite Med Term Tracks"));

    // prefix/suffix noise must not match (pattern is anchored)
    assert!(!is_managed_playlist_name("My Favorite Short Term Tracks"));
    assert!(!is_managed_playlist_name("Favorite Short Term Tracks 2"));
    assert!(!is_managed_playlist_name(""));
    assert!(!is_managed_playlist_name("Road Trip"));
}

#[test]
fn test_time_range_for_name() {
    assert_eq!(
        time_range_for_name("Favorite Short Term Tracks"),
        Some(TimeRange::Short)
    );
    assert_eq!(
        time_range_for_name("Favorite Medium Term Tracks"),
        Some(TimeRange::Medium)
    );
    assert_eq!(
        time_range_for_name("Favorite Long Term Tracks"),
        Some(TimeRange::Long)
    );

    assert_eq!(time_range_for_name("Favorite Eternal Term Tracks"), None);
    assert_eq!(time_range_for_name("Weekly Picks 12/2023"), None);
}

#[test]
fn test_time_range_round_trips_with_playlist_names() {
    for time_range in TimeRange::ALL {
        assert_eq!(
            time_range_for_name(time_range.playlist_name()),
            Some(time_range)
        );
        assert!(is_managed_playlist_name(time_range.playlist_name()));
    }
}

#[test]
fn test_time_range_query_params() {
    assert_eq!(TimeRange::Short.as_query_param(), "short_term");
    assert_eq!(TimeRange::Medium.as_query_param(), "medium_term");
    assert_eq!(TimeRange::Long.as_query_param(), "long_term");
}

#[test]
fn test_playlist_config_is_fully_populated() {
    let playlist = create_test_playlist("pl1", "Favorite Medium Term Tracks");
    let user = PrivateUser {
        id: "user1".to_string(),
        display_name: Some("User One".to_string()),
    };

    let config = playlist_config_for(&playlist, &user).expect("managed name should map");
    assert_eq!(config.name, "Favorite Medium Term Tracks");
    assert_eq!(config.id, "pl1");
    assert_eq!(config.user_id, "user1");
    assert_eq!(config.time_range, TimeRange::Medium);
    assert_eq!(config.description, "automated from toptracks");
    assert!(!config.public);
    assert!(!config.collaborative);
}

#[test]
fn test_playlist_config_defaults_for_null_fields() {
    let playlist = SimplePlaylist {
        id: "pl2".to_string(),
        name: "Favorite Long Term Tracks".to_string(),
        description: None,
        public: None,
        collaborative: false,
    };
    let user = PrivateUser {
        id: "user2".to_string(),
        display_name: None,
    };

    let config = playlist_config_for(&playlist, &user).expect("managed name should map");
    assert_eq!(config.description, "");
    assert!(!config.public);
}

#[test]
fn test_playlist_config_rejects_unmanaged_names() {
    let playlist = create_test_playlist("pl3", "Road Trip");
    let user = PrivateUser {
        id: "user3".to_string(),
        display_name: None,
    };

    assert!(playlist_config_for(&playlist, &user).is_none());
}

#[test]
fn test_track_uris_collects_all_listed_tracks() {
    let items = vec![
        create_test_item("t1", "spotify:track:t1"),
        create_test_item("t2", "spotify:track:t2"),
        create_test_item("t3", "spotify:track:t3"),
    ];

    let uris = track_uris(&items);
    assert_eq!(
        uris,
        vec!["spotify:track:t1", "spotify:track:t2", "spotify:track:t3"]
    );
}

#[test]
fn test_track_uris_skips_null_tracks() {
    let items = vec![
        create_test_item("t1", "spotify:track:t1"),
        PlaylistItem { track: None },
        create_test_item("t2", "spotify:track:t2"),
    ];

    let uris = track_uris(&items);
    assert_eq!(uris, vec!["spotify:track:t1", "spotify:track:t2"]);
}

#[test]
fn test_track_uris_empty_playlist() {
    let uris = track_uris(&[]);
    assert!(uris.is_empty());
}

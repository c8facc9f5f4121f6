use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, GetUserPlaylistsResponse,
        PlaylistItem, PlaylistItemsResponse, RemoveTracksRequest, SimplePlaylist, SnapshotResponse,
        TrackUri,
    },
};

/// Retrieves the current user's playlists (first page, up to 50).
///
/// 502 Bad Gateway responses are retried after a 10-second delay; other
/// errors are propagated immediately.
pub async fn current_playlists(token: &str) -> Result<Vec<SimplePlaylist>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}",
            uri = config::SPOTIFY_API_URL,
            limit = 50
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<GetUserPlaylistsResponse>().await?;
        return Ok(json.items);
    }
}

/// Creates a private, non-collaborative playlist for the user.
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
    description: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = config::SPOTIFY_API_URL,
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds a single track to a playlist.
///
/// One call per track; the fill pipeline wraps this in exponential-backoff
/// retry, so the function itself carries no retry logic.
pub async fn add_track(
    token: &str,
    playlist_id: &str,
    uri: &str,
) -> Result<SnapshotResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    let body = AddTracksRequest {
        uris: vec![uri.to_string()],
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await
}

/// Retrieves the items currently listed in a playlist (first page, up to 100).
pub async fn playlist_items(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<PlaylistItemsResponse>().await?;
    Ok(json.items)
}

/// Removes the given track URIs from a playlist. Callers chunk the URIs at
/// the API's limit of 100 per request.
pub async fn remove_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<SnapshotResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    let body = RemoveTracksRequest {
        tracks: uris.into_iter().map(|uri| TrackUri { uri }).collect(),
    };

    let client = Client::new();
    let response = client
        .delete(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await
}

//! Configuration management for the Top Tracks CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. The only values that
//! come from the environment are the Spotify API credentials and the CSRF
//! state token; every endpoint the tool talks to is a compile-time constant.

use dotenv;
use std::{env, path::PathBuf};

/// Spotify OAuth authorization endpoint.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth token exchange endpoint.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify Web API base URL.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// OAuth redirect URI. Must match the redirect URI registered with the
/// application at Spotify's developer portal.
pub const REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Bind address for the local OAuth callback server.
pub const SERVER_ADDR: &str = "127.0.0.1:8080";

/// Scopes requested during authorization.
pub const SPOTIFY_SCOPES: &[&str] = &[
    "user-read-private",
    "user-top-read",
    "playlist-modify-private",
    "playlist-read-private",
];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under `<data_local_dir>/toptracks/.env`, creating the
/// directory first so users have a place to drop their credentials:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// A missing `.env` file is not an error; the variables may already be set
/// in the real environment.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the CSRF state token echoed through the OAuth redirect.
///
/// The callback handler rejects any redirect whose `state` query parameter
/// does not match this value.
///
/// # Panics
///
/// Panics if the `SPOTIFY_AUTH_STATE` environment variable is not set.
pub fn auth_state() -> String {
    env::var("SPOTIFY_AUTH_STATE").expect("SPOTIFY_AUTH_STATE must be set")
}

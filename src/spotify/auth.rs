use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tokio::sync::{Mutex, oneshot};

use crate::{
    Res, config,
    server::start_api_server,
    types::{Token, TokenHandoff},
    warning,
};

/// Runs the complete OAuth 2.0 authorization-code handshake with Spotify.
///
/// This function orchestrates the whole flow:
/// 1. Creates the one-shot token channel and stores the sender in shared
///    state for the callback handler
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback to deliver a token
///
/// The `state` query parameter carries the CSRF token from the environment;
/// the callback rejects redirects whose state does not match.
///
/// # Returns
///
/// The exchanged [`Token`] on success, or an error if the browser flow is
/// abandoned, the callback fails, or the 120-second timeout elapses.
///
/// # Error Handling
///
/// Browser launch failures are non-fatal: a warning with the URL is printed
/// so the user can navigate manually. Timeouts and a dropped channel sender
/// are reported as errors for the caller to handle.
pub async fn authorize() -> Res<Token> {
    let (sender, receiver) = oneshot::channel::<Token>();
    let shared_state: TokenHandoff = Arc::new(Mutex::new(Some(sender)));

    // start callback server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        spotify_auth_url = config::SPOTIFY_AUTH_URL,
        client_id = &config::spotify_client_id(),
        redirect_uri = config::REDIRECT_URI,
        scope = config::SPOTIFY_SCOPES.join("%20"),
        state = &config::auth_state()
    );

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for the callback to be hit
    match tokio::time::timeout(Duration::from_secs(120), receiver).await {
        Ok(Ok(token)) => Ok(token),
        Ok(Err(_)) => Err("authorization callback ended without a token".into()),
        Err(_) => Err("timed out waiting for authorization".into()),
    }
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization-code flow by posting the code together with
/// the client credentials to the accounts-service token endpoint. The code
/// is single-use and expires quickly, so the exchange happens immediately
/// inside the callback handler.
pub async fn exchange_code(code: &str) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config::REDIRECT_URI),
            ("client_id", &config::spotify_client_id()),
            ("client_secret", &config::spotify_client_secret()),
        ])
        .send()
        .await?
        .error_for_status()?;

    res.json::<Token>().await
}

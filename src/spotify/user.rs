use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::PrivateUser};

/// Retrieves the authenticated user's profile from the Spotify Web API.
///
/// The user id is needed for playlist creation and is printed at the start
/// of every run. 502 Bad Gateway responses are retried after a 10-second
/// delay; other errors are propagated immediately.
pub async fn current_user(token: &str) -> Result<PrivateUser, reqwest::Error> {
    loop {
        let api_url = format!("{uri}/me", uri = config::SPOTIFY_API_URL);

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

        return response.json::<PrivateUser>().await;
    }
}

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{TimeRange, TopTracksResponse, Track},
    warning,
};

/// Retrieves the user's top played tracks for one time window.
///
/// Fetches up to `limit` tracks from the `/me/top/tracks` endpoint for the
/// given [`TimeRange`]. The three fill pipelines call this concurrently,
/// one per window.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - Which of the three reporting windows to query
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Rate Limiting
///
/// The function implements intelligent rate limit handling:
/// - Detects 429 Too Many Requests responses
/// - Reads the `Retry-After` header for the recommended delay
/// - Automatically waits and retries for delays <= 120 seconds
/// - Issues a warning for excessive delays (> 120 seconds)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - The top tracks, most played first
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Example
///
/// ```
/// let tracks = top_tracks(&token, TimeRange::Short, 50).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub async fn top_tracks(
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={time_range}&limit={limit}",
        uri = config::SPOTIFY_API_URL,
        time_range = time_range.as_query_param(),
        limit = limit
    );

    loop {
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue;
                } else {
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                        retry_after
                    );
                }
            }
        }

        let response = response.error_for_status()?;
        let json = response.json::<TopTracksResponse>().await?;

        return Ok(json.items);
    }
}

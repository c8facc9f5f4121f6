use std::time::{Duration, Instant};

use backon::{ExponentialBuilder, Retryable};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, error, info, spotify, success,
    types::{PlaylistConfig, PlaylistTableRow, PrivateUser, SimplePlaylist, TimeRange},
    utils, warning,
};

const PLAYLIST_DESCRIPTION: &str = "automated from toptracks";

/// Entry point for the `playlist` subcommand.
///
/// Always authenticates and announces the logged-in user first, then runs
/// the selected operations. The flags are independent, so a single run can
/// list, purge and fill in that order.
pub async fn playlist(fill: bool, purge_fav: bool, list_all: bool) {
    let started = Instant::now();

    let token = match spotify::auth::authorize().await {
        Ok(token) => token,
        Err(e) => error!("Authorization failed: {}", e),
    };

    let user = match spotify::user::current_user(&token.access_token).await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch current user: {}", e),
    };
    info!("You are logged in as: {}", user.id);

    if list_all {
        list_playlists(&token.access_token, &user).await;
    }

    if purge_fav {
        purge_favorites(&token.access_token, &user).await;
    }

    if fill {
        fill_favorites(&token.access_token, &user).await;
    }

    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    success!("Done! Completed in {:?}", elapsed);
}

async fn list_playlists(token: &str, user: &PrivateUser) {
    info!("Printing all current playlists for user: {}", user.id);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match spotify::playlist::current_playlists(token).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Unable to get user playlists: {}", e)
        }
    };

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Finds the managed playlists among the user's playlists, creating all
/// three if none exist yet.
async fn managed_playlists(token: &str, user: &PrivateUser) -> Res<Vec<SimplePlaylist>> {
    let all_playlists = spotify::playlist::current_playlists(token).await?;
    let mut found: Vec<SimplePlaylist> = all_playlists
        .into_iter()
        .filter(|p| utils::is_managed_playlist_name(&p.name))
        .collect();

    if found.is_empty() {
        for time_range in TimeRange::ALL {
            let created = spotify::playlist::create(
                token,
                &user.id,
                time_range.playlist_name(),
                PLAYLIST_DESCRIPTION,
            )
            .await?;
            found.push(SimplePlaylist {
                id: created.id,
                name: created.name,
                description: created.description,
                public: created.public,
                collaborative: created.collaborative,
            });
        }
    }

    Ok(found)
}

async fn purge_favorites(token: &str, user: &PrivateUser) {
    info!("Purging tracks from the automated playlists");

    let playlists = match managed_playlists(token, user).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Unable to get automated playlists: {}", e),
    };

    for playlist in playlists {
        info!("Purging tracks on playlist {}", playlist.name);
        match purge_tracks(token, &playlist).await {
            Ok(removed) => success!("Removed {} tracks from {}", removed, playlist.name),
            Err(e) => warning!("Failed to purge {}: {}", playlist.name, e),
        }
    }
}

async fn purge_tracks(token: &str, playlist: &SimplePlaylist) -> Result<usize, reqwest::Error> {
    let items = spotify::playlist::playlist_items(token, &playlist.id).await?;
    let uris = utils::track_uris(&items);
    if uris.is_empty() {
        return Ok(0);
    }

    let removed = uris.len();
    for chunk in uris.chunks(100) {
        spotify::playlist::remove_tracks(token, &playlist.id, chunk.to_vec()).await?;
    }

    Ok(removed)
}

async fn fill_favorites(token: &str, user: &PrivateUser) {
    let playlists = match managed_playlists(token, user).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Unable to get automated playlists: {}", e),
    };

    let configs: Vec<PlaylistConfig> = playlists
        .iter()
        .filter_map(|p| utils::playlist_config_for(p, user))
        .collect();

    // one task per time range, joined before the run finishes
    let mut handles = Vec::new();
    for config in configs {
        let token = token.to_string();
        let handle = tokio::spawn(async move { fill_top_tracks(&token, config).await });
        handles.push(handle);
    }

    for handle in handles {
        match handle.await {
            Ok(Ok(name)) => success!("Filled {}", name),
            Ok(Err(e)) => error!("Failed to fill playlist: {}", e),
            Err(e) => error!("Task join error: {}", e),
        }
    }
}

/// Fetches the top tracks for one time range and pushes them into the
/// matching playlist, one add-call per track with retry until success.
async fn fill_top_tracks(token: &str, config: PlaylistConfig) -> Res<String> {
    info!("Fetching top tracks for {}", config.name);
    let tracks = spotify::tracks::top_tracks(token, config.time_range, 50).await?;

    for track in &tracks {
        (|| spotify::playlist::add_track(token, &config.id, &track.uri))
            .retry(ExponentialBuilder::default().without_max_times())
            .await?;
    }

    Ok(config.name)
}

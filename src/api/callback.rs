use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{config, spotify, types::TokenHandoff, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<TokenHandoff>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    // CSRF check against the state token we sent out
    if params.get("state").map(String::as_str) != Some(config::auth_state().as_str()) {
        warning!("State mismatch on OAuth callback");
        return Html("<h4>State mismatch.</h4>");
    }

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            let mut slot = shared_state.lock().await;
            if let Some(sender) = slot.take() {
                let _ = sender.send(token);
            }
            Html("<h2>Login completed.</h2><p>You can close this browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}

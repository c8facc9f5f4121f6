//! HTTP endpoints for the local callback server.
//!
//! The loopback server exists only for the duration of the OAuth handshake.
//! It exposes two endpoints:
//!
//! - [`callback`] - receives the authorization redirect from Spotify,
//!   validates the CSRF state parameter, exchanges the code for a token and
//!   hands it to the main task through the one-shot channel
//! - [`health`] - returns application status and version for a quick check
//!   that the listener is up

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

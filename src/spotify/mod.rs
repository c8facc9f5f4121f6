//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API for the operations this tool needs:
//! the OAuth authorization-code handshake, the current-user lookup, the
//! top-tracks query, and playlist discovery, creation, fill and purge. It
//! abstracts the HTTP traffic behind plain async functions so the CLI layer
//! only deals with typed requests and responses.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow with a CSRF state token:
//!   drives the browser redirect, the loopback callback server and the
//!   code-for-token exchange
//! - [`user`] - current-user profile lookup (`GET /me`)
//! - [`tracks`] - the user's top played tracks per time window
//! - [`playlist`] - playlist listing, creation, track add and track removal
//!
//! ## Error handling
//!
//! All network functions return `Result<_, reqwest::Error>` and propagate
//! with `?`. Retry texture:
//!
//! - 502 Bad Gateway on reads is retried after a 10-second delay
//! - 429 Too Many Requests honors the `Retry-After` header for delays up to
//!   120 seconds and warns for anything longer
//!
//! The add-track call carries no retry of its own; the fill pipeline wraps
//! it in exponential backoff.

pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;

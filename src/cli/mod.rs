//! # CLI Module
//!
//! User-facing command implementations. The single `playlist` command drives
//! everything: it performs the OAuth handshake, announces the logged-in
//! user, and then runs whichever of the list/purge/fill operations were
//! selected on the command line.

mod playlist;

pub use playlist::playlist;

//! # CLI Module
//!
//! This module provides the command-line interface layer for Scroblcli, a
//! Last.fm client that replays portable-player listening logs. It implements
//! all user-facing commands and coordinates between the API layer, the
//! session cache and the log parser.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Performs the one-time token handshake and caches the
//!   resulting session key per user
//!
//! ### Submission
//!
//! - [`scrobble`] - Parses a listening log, filters for fully listened
//!   entries and submits them one at a time in log order
//!
//! ### Inspection
//!
//! - [`tracks`] - Renders the parsed log as a table without submitting
//!   anything
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session Cache)
//!     ↓
//! API Layer (Last.fm Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the lastfm and management modules while
//! handling user interaction, progress feedback and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! Nearly everything is fatal at this layer: the command prints context via
//! the `error!` macro and the process terminates. The only retried condition
//! is the API's transient service error, handled inside the client. When a
//! submission batch dies partway, the error message states how many entries
//! had already been submitted, because no record of them is kept.
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! scroblcli auth                       # Authorize with Last.fm
//! ```
//!
//! ### Regular Usage
//! ```bash
//! scroblcli tracks --file .scrobbler.log      # Preview the log
//! scroblcli scrobble --file .scrobbler.log    # Submit listened entries
//! scroblcli scrobble --file .scrobbler.log --utc-offset -3600
//! ```

mod auth;
mod scrobble;
mod tracks;

pub use auth::auth;
pub use scrobble::scrobble;
pub use tracks::tracks;

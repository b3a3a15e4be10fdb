//! # Last.fm Integration Module
//!
//! This module provides the interface to the Last.fm web API, implementing
//! request signing, the session-key handshake and scrobble submission. It is
//! the only place in the application that talks to the network.
//!
//! ## Overview
//!
//! Every API call goes through [`client::LastfmClient`], which owns the HTTP
//! client and the API credentials. The client signs the parameter set,
//! appends the response format, issues the request and decodes either a
//! success payload or an error payload.
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Last.fm Integration Layer
//!     ├── Authentication (token → authorize → session key)
//!     ├── Request Signing (sorted params + secret, MD5)
//!     └── Scrobble Submission (track.scrobble)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Last.fm Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The API uses a token handshake rather than OAuth:
//!
//! 1. **Token Request**: `auth.getToken` yields a one-time request token
//! 2. **User Authorization**: the operator grants access in the browser at
//!    the authorize URL
//! 3. **Session Exchange**: `auth.getSession` trades the authorized token
//!    for a long-lived session key
//!
//! The session key never expires on its own; it stays valid until the user
//! revokes the application, which is why it is cached on disk and reused
//! (see [`crate::management::SessionManager`]).
//!
//! ## Error Handling
//!
//! Error payloads are JSON objects carrying `error` and `message`. The
//! service-temporarily-unavailable code is retried with bounded attempts and
//! exponential backoff; every other code is surfaced to the caller, where
//! the CLI layer treats it as fatal. Bodies that fail to decode as JSON are
//! reported together with their HTTP status.

pub mod auth;
pub mod client;
pub mod scrobble;

//! Demo webhook verification backend.
//!
//! A small axum service the marketing site can call to exercise a webhook
//! signature flow without touching anything production-grade:
//! - `GET /healthz`: liveness probe
//! - `GET /demo/example`: synthetic event plus an example signature
//! - `POST /demo/example`: HMAC-SHA256 verification echo
//!
//! Signatures are computed over a canonical form of the payload, so key
//! order and whitespace differences never invalidate them.

pub mod config;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use web::{AppState, SignatureOutcome};

//! Web surface for the demo webhook service.
//!
//! Three endpoints compose the configuration, CORS policy, and signature
//! helpers:
//! - `GET /healthz`: liveness probe
//! - `GET /demo/example`: synthetic event plus an example signature
//! - `POST /demo/example`: HMAC-SHA256 verification echo

pub mod canonical;
pub mod cors;
pub mod handlers;
pub mod signature;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use canonical::canonicalize;
pub use cors::{cors_layer, origin_allowed};
pub use handlers::{
    demo_example_get, demo_example_post, healthz, AppState, ExampleResponse, HealthResponse,
    VerifyResponse, SERVICE_NAME, SIGNATURE_HEADER,
};
pub use signature::{compute_signature, verify_signature, SignatureOutcome};

/// Build the application router with CORS and request tracing attached.
///
/// Shared by the server binary and the integration tests.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/demo/example",
            get(demo_example_get).post(demo_example_post),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

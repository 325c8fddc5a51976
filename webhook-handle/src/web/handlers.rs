//! Demo endpoint handlers.
//!
//! Every handler answers 200 with diagnostic fields. Malformed bodies,
//! missing headers, and a missing secret are outcomes to report, not
//! errors to propagate.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::config::Config;
use crate::web::signature::{compute_signature, verify_signature};

/// Service identifier echoed in every response.
pub const SERVICE_NAME: &str = "webhook-handle";

/// Header carrying the payload signature on incoming requests.
/// Header-name matching is case-insensitive.
pub const SIGNATURE_HEADER: &str = "X-Signature";

const HOW_TO_TEST: &str = "POST JSON to /demo/example with header \
    'X-Signature: sha256=...' computed using your WEBHOOK_SECRET.";

const NOTE_SKIPPED: &str = "signature check skipped (missing secret or header)";
const NOTE_COMPARED: &str = "signature compared";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub time: u64,
}

/// Health check endpoint.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        time: unix_time(),
    })
}

// =============================================================================
// Demo Webhook Example
// =============================================================================

/// Response for the GET example endpoint.
#[derive(Serialize)]
pub struct ExampleResponse {
    pub service: &'static str,
    pub example: Value,
    pub how_to_test: &'static str,
    /// Null when no secret is configured
    pub signature_example: Option<String>,
}

/// Response for the POST verification endpoint.
#[derive(Serialize)]
pub struct VerifyResponse {
    pub service: &'static str,
    pub received_bytes: usize,
    /// Parsed request body, or null when it was not valid JSON
    pub received: Option<Value>,
    /// true / false, or null when verification was skipped
    pub signature_valid: Option<bool>,
    pub expected_signature: String,
    pub note: &'static str,
    pub time: u64,
}

/// The fixed synthetic event shown by the demo endpoint.
fn sample_event() -> Value {
    json!({
        "event": "example.webhook",
        "id": "evt_demo_123",
        "received_at": unix_time(),
        "data": {
            "object": {
                "id": "obj_demo_123",
                "amount": 1999,
                "currency": "usd",
                "tags": ["demo", "webhook", "handle"],
            }
        },
    })
}

/// Return a synthetic webhook-style payload and, when a secret is
/// configured, the signature a correctly signed copy would carry.
pub async fn demo_example_get(State(state): State<AppState>) -> Json<ExampleResponse> {
    let example = sample_event();

    let signature_example = if state.config.webhook_secret.is_empty() {
        None
    } else {
        // to_vec of a json! value is already canonical: sorted keys, no spaces
        let body = serde_json::to_vec(&example).unwrap_or_default();
        Some(compute_signature(&state.config.webhook_secret, &body))
    };

    info!(signed = signature_example.is_some(), "example_requested");

    Json(ExampleResponse {
        service: SERVICE_NAME,
        example,
        how_to_test: HOW_TO_TEST,
        signature_example,
    })
}

/// Accept a payload and report whether its HMAC signature checks out.
///
/// The body is taken as raw bytes; parsing it as JSON happens only to echo
/// it back and is allowed to fail.
pub async fn demo_example_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<VerifyResponse> {
    let supplied = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let (outcome, expected) = verify_signature(&state.config.webhook_secret, &body, supplied);

    let received = serde_json::from_slice::<Value>(&body).ok();

    info!(
        received_bytes = body.len(),
        has_signature = !supplied.is_empty(),
        parsed = received.is_some(),
        outcome = ?outcome,
        "webhook_received"
    );

    Json(VerifyResponse {
        service: SERVICE_NAME,
        received_bytes: body.len(),
        received,
        signature_valid: outcome.as_bool(),
        expected_signature: expected,
        note: if outcome.is_skipped() {
            NOTE_SKIPPED
        } else {
            NOTE_COMPARED
        },
        time: unix_time(),
    })
}

/// Current Unix time in seconds.
fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::signature::SignatureOutcome;

    #[test]
    fn test_sample_event_shape() {
        let event = sample_event();
        assert_eq!(event["event"], "example.webhook");
        assert_eq!(event["id"], "evt_demo_123");
        assert_eq!(event["data"]["object"]["amount"], 1999);
        assert_eq!(event["data"]["object"]["currency"], "usd");
        assert!(event["received_at"].is_u64());
    }

    #[test]
    fn test_verify_response_serializes_nulls() {
        let response = VerifyResponse {
            service: SERVICE_NAME,
            received_bytes: 0,
            received: None,
            signature_valid: SignatureOutcome::Skipped.as_bool(),
            expected_signature: "sha256=00".to_string(),
            note: NOTE_SKIPPED,
            time: 0,
        };
        let value = serde_json::to_value(&response).unwrap();
        // Nulls must be present, not omitted
        assert!(value["received"].is_null());
        assert!(value["signature_valid"].is_null());
        assert_eq!(value["service"], "webhook-handle");
    }
}

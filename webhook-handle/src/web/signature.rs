//! Webhook signature computation and verification.
//!
//! Signatures are HMAC-SHA256 over the canonical form of the payload,
//! rendered as `sha256=<lowercase hex digest>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::web::canonical::canonicalize;

type HmacSha256 = Hmac<Sha256>;

/// Prefix carried by signature header values.
pub const SIGNATURE_PREFIX: &str = "sha256";

/// Secret used to render an illustrative signature when no real secret is
/// configured. Display only; the comparison path never reads it.
const PLACEHOLDER_SECRET: &str = "demo-secret";

/// Result of checking a supplied signature against the computed one.
///
/// `Skipped` means no secret was configured, so nothing could be checked;
/// it must never be read as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureOutcome {
    Valid,
    Invalid,
    Skipped,
}

impl SignatureOutcome {
    /// Tri-state view for JSON responses: true / false / null.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            SignatureOutcome::Valid => Some(true),
            SignatureOutcome::Invalid => Some(false),
            SignatureOutcome::Skipped => None,
        }
    }

    pub fn is_skipped(self) -> bool {
        matches!(self, SignatureOutcome::Skipped)
    }
}

/// Compute `sha256=<hex digest>` of the given bytes with the given secret.
pub fn compute_signature(secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);
    format!("{}={}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes()))
}

/// Verify an incoming signature header value against the computed digest.
///
/// Returns the outcome together with the signature the server computed
/// over the canonical form of `raw`. With no secret configured the outcome
/// is [`SignatureOutcome::Skipped`] and the returned signature is rendered
/// with a placeholder secret, purely as sample output.
///
/// A missing or empty header value compares as the empty string and yields
/// `Invalid` whenever a secret is configured.
pub fn verify_signature(
    secret: &str,
    raw: &[u8],
    header_value: &str,
) -> (SignatureOutcome, String) {
    if secret.is_empty() {
        let expected = compute_signature(PLACEHOLDER_SECRET, &canonicalize(raw));
        return (SignatureOutcome::Skipped, expected);
    }

    let expected = compute_signature(secret, &canonicalize(raw));
    let expected_hex = &expected[SIGNATURE_PREFIX.len() + 1..];

    // The prefix is optional on input; strip it case-insensitively.
    let supplied = header_value.trim();
    let supplied = match supplied.split_once('=') {
        Some((prefix, rest)) if prefix.eq_ignore_ascii_case(SIGNATURE_PREFIX) => rest,
        _ => supplied,
    };

    if constant_time_compare(supplied, expected_hex) {
        (SignatureOutcome::Valid, expected)
    } else {
        (SignatureOutcome::Invalid, expected)
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

//! Signature verification for identity-directory webhooks.
//!
//! Incoming deliveries carry an HMAC-SHA256 signature over
//! `"{timestamp}.{payload}"` computed with a shared secret, plus the Unix
//! timestamp itself. Verification checks both the signature and that the
//! timestamp is within [`TIMESTAMP_TOLERANCE_SECS`] of the current time,
//! so captured deliveries cannot be replayed later.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed clock skew between delivery and verification, in seconds.
pub const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// Compute the hex HMAC-SHA256 signature for a timestamped payload.
///
/// Exposed so tests (and a future delivery sender) produce signatures the
/// same way verification expects them.
pub fn sign_payload(secret: &str, timestamp: i64, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(format!("{timestamp}.{payload}").as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

/// Verify a webhook delivery.
///
/// `timestamp` is the Unix timestamp from the delivery headers and
/// `signature` the hex digest from the signature header. Returns
/// `CoreError::Unauthorized` when the timestamp is stale or the signature
/// does not match.
pub fn verify_signature(
    secret: &str,
    timestamp: i64,
    payload: &str,
    signature: &str,
) -> Result<(), CoreError> {
    let now = chrono::Utc::now().timestamp();
    if (now - timestamp).abs() > TIMESTAMP_TOLERANCE_SECS {
        return Err(CoreError::Unauthorized(
            "Webhook timestamp outside tolerance".into(),
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(format!("{timestamp}.{payload}").as_bytes());

    let expected = decode_hex(signature)
        .ok_or_else(|| CoreError::Unauthorized("Malformed webhook signature".into()))?;

    // verify_slice is constant-time.
    mac.verify_slice(&expected)
        .map_err(|_| CoreError::Unauthorized("Invalid webhook signature".into()))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    s.as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    #[test]
    fn test_valid_signature_verifies() {
        let now = chrono::Utc::now().timestamp();
        let payload = r#"{"type":"user.created"}"#;
        let signature = sign_payload(SECRET, now, payload);

        assert!(verify_signature(SECRET, now, payload, &signature).is_ok());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let now = chrono::Utc::now().timestamp();
        let payload = r#"{"type":"user.created"}"#;
        let signature = sign_payload("whsec_other", now, payload);

        let result = verify_signature(SECRET, now, payload, &signature);
        assert!(result.is_err(), "signature from another secret must fail");
    }

    #[test]
    fn test_tampered_payload_fails() {
        let now = chrono::Utc::now().timestamp();
        let signature = sign_payload(SECRET, now, r#"{"type":"user.created"}"#);

        let result = verify_signature(SECRET, now, r#"{"type":"user.deleted"}"#, &signature);
        assert!(result.is_err());
    }

    #[test]
    fn test_stale_timestamp_fails() {
        let stale = chrono::Utc::now().timestamp() - TIMESTAMP_TOLERANCE_SECS - 60;
        let payload = r#"{"type":"user.created"}"#;
        let signature = sign_payload(SECRET, stale, payload);

        let result = verify_signature(SECRET, stale, payload, &signature);
        assert!(result.is_err(), "stale delivery must be rejected");
    }

    #[test]
    fn test_malformed_hex_fails() {
        let now = chrono::Utc::now().timestamp();
        let result = verify_signature(SECRET, now, "{}", "not-hex");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_ascii_signature_fails() {
        // Even byte length, but multi-byte characters; must reject
        // cleanly rather than slicing mid-codepoint.
        let now = chrono::Utc::now().timestamp();
        let result = verify_signature(SECRET, now, "{}", "\u{20ac}a");
        assert!(result.is_err());
    }
}

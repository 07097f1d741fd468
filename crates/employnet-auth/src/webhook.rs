//! HMAC signature verification for inbound webhooks.
//!
//! Integrations sign each delivery over `{id}.{timestamp}.{body}` with a
//! per-integration shared secret. The signature header carries one or more
//! space-separated `v1,<base64>` entries (multiple entries appear during
//! secret rotation). Verification is constant-time via the hmac crate.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use employnet_core::error::AppError;
use employnet_core::result::AppResult;

type HmacSha256 = Hmac<Sha256>;

/// Verifies webhook deliveries for a single integration secret.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
    tolerance_seconds: i64,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("tolerance_seconds", &self.tolerance_seconds)
            .finish()
    }
}

impl WebhookVerifier {
    /// Create a verifier for one integration's signing secret.
    pub fn new(secret: &str, tolerance_seconds: i64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            tolerance_seconds,
        }
    }

    /// Verify a delivery's signature and timestamp.
    ///
    /// `id` and `timestamp` come from the delivery headers; `body` is the
    /// raw request body before any parsing. The timestamp must fall within
    /// the configured tolerance window of the current time.
    pub fn verify(
        &self,
        id: &str,
        timestamp: &str,
        signature_header: &str,
        body: &[u8],
    ) -> AppResult<()> {
        if self.secret.is_empty() {
            return Err(AppError::configuration(
                "Webhook secret is not configured",
            ));
        }

        let ts: i64 = timestamp
            .parse()
            .map_err(|_| AppError::authentication("Invalid webhook timestamp"))?;
        let skew = (Utc::now().timestamp() - ts).abs();
        if skew > self.tolerance_seconds {
            return Err(AppError::authentication("Webhook timestamp out of tolerance"));
        }

        let payload = signed_payload(id, timestamp, body);

        for entry in signature_header.split_whitespace() {
            let Some(encoded) = entry.strip_prefix("v1,") else {
                continue;
            };
            let Ok(candidate) = STANDARD.decode(encoded) else {
                continue;
            };
            let mut mac = HmacSha256::new_from_slice(&self.secret)
                .map_err(|e| AppError::internal(format!("HMAC init failed: {e}")))?;
            mac.update(&payload);
            if mac.verify_slice(&candidate).is_ok() {
                return Ok(());
            }
        }

        Err(AppError::authentication("Webhook signature mismatch"))
    }

    /// Compute the `v1,<base64>` signature for a payload. Used by tests
    /// and by outbound delivery simulation in local development.
    pub fn sign(&self, id: &str, timestamp: &str, body: &[u8]) -> AppResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::internal(format!("HMAC init failed: {e}")))?;
        mac.update(&signed_payload(id, timestamp, body));
        let digest = mac.finalize().into_bytes();
        Ok(format!("v1,{}", STANDARD.encode(digest)))
    }
}

fn signed_payload(id: &str, timestamp: &str, body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(id.len() + timestamp.len() + body.len() + 2);
    payload.extend_from_slice(id.as_bytes());
    payload.push(b'.');
    payload.extend_from_slice(timestamp.as_bytes());
    payload.push(b'.');
    payload.extend_from_slice(body);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_str() -> String {
        Utc::now().timestamp().to_string()
    }

    #[test]
    fn valid_signature_passes() {
        let verifier = WebhookVerifier::new("whsec_test", 300);
        let ts = now_str();
        let body = br#"{"event":"video.watched"}"#;
        let sig = verifier.sign("msg_1", &ts, body).unwrap();
        assert!(verifier.verify("msg_1", &ts, &sig, body).is_ok());
    }

    #[test]
    fn tampered_body_fails() {
        let verifier = WebhookVerifier::new("whsec_test", 300);
        let ts = now_str();
        let sig = verifier.sign("msg_1", &ts, b"original").unwrap();
        let err = verifier.verify("msg_1", &ts, &sig, b"tampered").unwrap_err();
        assert_eq!(err.message, "Webhook signature mismatch");
    }

    #[test]
    fn wrong_secret_fails() {
        let signer = WebhookVerifier::new("whsec_a", 300);
        let verifier = WebhookVerifier::new("whsec_b", 300);
        let ts = now_str();
        let sig = signer.sign("msg_1", &ts, b"body").unwrap();
        assert!(verifier.verify("msg_1", &ts, &sig, b"body").is_err());
    }

    #[test]
    fn stale_timestamp_fails() {
        let verifier = WebhookVerifier::new("whsec_test", 300);
        let ts = (Utc::now().timestamp() - 1000).to_string();
        let sig = verifier.sign("msg_1", &ts, b"body").unwrap();
        let err = verifier.verify("msg_1", &ts, &sig, b"body").unwrap_err();
        assert_eq!(err.message, "Webhook timestamp out of tolerance");
    }

    #[test]
    fn rotated_secret_header_still_passes() {
        let old = WebhookVerifier::new("whsec_old", 300);
        let new = WebhookVerifier::new("whsec_new", 300);
        let ts = now_str();
        let old_sig = old.sign("msg_1", &ts, b"body").unwrap();
        let new_sig = new.sign("msg_1", &ts, b"body").unwrap();
        let header = format!("{old_sig} {new_sig}");
        assert!(new.verify("msg_1", &ts, &header, b"body").is_ok());
    }

    #[test]
    fn empty_secret_is_configuration_error() {
        let verifier = WebhookVerifier::new("", 300);
        let ts = now_str();
        assert!(verifier.verify("msg_1", &ts, "v1,abc", b"body").is_err());
    }
}

// verify.rs
use chrono::Utc;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::signature::{canonical_payload, derive_signature};
use crate::token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("Missing HMAC signature")]
    MissingSignature,
    #[error("Missing secret value")]
    MissingSecret,
    #[error("Invalid token format")]
    InvalidTokenFormat,
    #[error("Invalid token encoding")]
    InvalidTokenEncoding,
    #[error("Missing attributes in signature")]
    MalformedPayload,
    #[error("Signature expired")]
    SignatureExpired,
    #[error("Error generating signature: {0}")]
    SignatureDerivation(String),
    #[error("Invalid signature")]
    InvalidSignature,
}

/// Verifies subscription handshake tokens against a shared secret.
/// Configuration is supplied once at construction; verification itself is
/// stateless and reads the wall clock exactly once per call.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: String,
    service_tag: String,
    backdate_window_ms: i64,
}

impl SignatureVerifier {
    pub fn new(secret: &str, service_tag: &str, backdate_window_ms: i64) -> Self {
        Self {
            secret: secret.to_string(),
            service_tag: service_tag.to_string(),
            backdate_window_ms,
        }
    }

    /// Checks a composite `payload_b64.signature_hex` token.
    ///
    /// Expiry is checked before any derivation; the signature comparison is
    /// case-insensitive and constant-time over the normalized hex.
    pub fn verify(&self, token: &str) -> Result<(), VerifyError> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    fn verify_at(&self, token: &str, now_ms: i64) -> Result<(), VerifyError> {
        if token.is_empty() {
            return Err(VerifyError::MissingSignature);
        }
        if self.secret.is_empty() {
            return Err(VerifyError::MissingSecret);
        }

        let (payload, request_signature) = token::decode(token)?;

        let expire_millisecond: i64 = payload
            .expire_millisecond
            .parse()
            .map_err(|_| VerifyError::MalformedPayload)?;
        if now_ms > expire_millisecond {
            return Err(VerifyError::SignatureExpired);
        }

        let data = canonical_payload(
            &payload.expire_millisecond,
            &payload.endpoint_url,
            &payload.nonce,
        );
        let expected = derive_signature(
            &self.secret,
            &payload.nonce,
            expire_millisecond,
            &data,
            &self.service_tag,
            self.backdate_window_ms,
        )?;

        let supplied = request_signature.to_ascii_lowercase();
        if bool::from(expected.as_bytes().ct_eq(supplied.as_bytes())) {
            Ok(())
        } else {
            Err(VerifyError::InvalidSignature)
        }
    }
}

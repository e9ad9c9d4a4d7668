// token.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::verify::VerifyError;

/// Signed claims carried in the first token segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    #[serde(default)]
    pub endpoint_url: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub expire_millisecond: String,
}

/// Splits a composite `payload_b64.signature_hex` token and decodes the
/// payload segment. All three payload fields must be present and non-empty.
pub fn decode(token: &str) -> Result<(TokenPayload, String), VerifyError> {
    let mut parts = token.split('.');
    let (payload_b64, signature_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(payload), Some(signature), None) => (payload, signature),
        _ => return Err(VerifyError::InvalidTokenFormat),
    };

    let payload_bytes = STANDARD
        .decode(payload_b64)
        .map_err(|_| VerifyError::InvalidTokenEncoding)?;

    let payload: TokenPayload =
        serde_json::from_slice(&payload_bytes).map_err(|_| VerifyError::MalformedPayload)?;

    if payload.endpoint_url.is_empty()
        || payload.nonce.is_empty()
        || payload.expire_millisecond.is_empty()
    {
        return Err(VerifyError::MalformedPayload);
    }

    Ok((payload, signature_hex.to_string()))
}

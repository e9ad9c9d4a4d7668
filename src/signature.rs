// signature.rs
use crate::digest::hmac_sha256;
use crate::verify::VerifyError;

/// Canonical string the signature is computed over. Senders reproduce this
/// template byte for byte; any change to spacing or field order yields a
/// different signature.
pub fn canonical_payload(expire_millisecond: &str, endpoint_url: &str, nonce: &str) -> String {
    format!(
        "{{\"expireMillisecond\": \"{expire_millisecond}\",\"hashMechanism\": \"hmacSHA256\",\"endpointUrl\": \"{endpoint_url}\",\"nonce\": \"{nonce}\"}}"
    )
}

/// Derives the request signature through a four-stage HMAC-SHA256 chain,
/// each stage's output keying the next:
///
/// 1. `k1 = HMAC(nonce_bytes, secret_bytes)`
/// 2. `k2 = HMAC(timestamp, k1)` where timestamp = expire - backdate window
/// 3. `k3 = HMAC(service_tag, k2)` (domain separation)
/// 4. `signature = HMAC(canonical_payload, k3)`
///
/// The nonce is hex-encoded key material and must decode. The secret is
/// hex-decoded when it is valid hex, otherwise its raw UTF-8 bytes are used
/// as the key; both sides of the handshake apply the same rule, so either
/// form of secret stays compatible.
///
/// Returns the signature as lower-case hex (64 characters).
pub fn derive_signature(
    secret: &str,
    nonce: &str,
    expire_millisecond: i64,
    canonical_payload: &str,
    service_tag: &str,
    backdate_window_ms: i64,
) -> Result<String, VerifyError> {
    let secret_bytes = hex::decode(secret).unwrap_or_else(|_| secret.as_bytes().to_vec());
    let nonce_bytes = hex::decode(nonce)
        .map_err(|_| VerifyError::SignatureDerivation("nonce is not valid hex".to_string()))?;

    let timestamp = (expire_millisecond - backdate_window_ms).to_string();

    let k1 = hmac_sha256(&nonce_bytes, &secret_bytes);
    let k2 = hmac_sha256(timestamp.as_bytes(), &k1);
    let k3 = hmac_sha256(service_tag.as_bytes(), &k2);
    let signature = hmac_sha256(canonical_payload.as_bytes(), &k3);

    Ok(hex::encode(signature))
}

// digest.rs
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Keyed hash over raw bytes. HMAC-SHA256 accepts keys of any length,
/// so construction cannot fail once the primitive is linked in.
pub fn hmac_sha256(message: &[u8], key: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Plain (unkeyed) SHA-256.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_matches_published_vector() {
        // https://docs.github.com/en/webhooks/using-webhooks/validating-webhook-deliveries
        let out = hmac_sha256(b"Hello, World!", b"It's a Secret to Everybody");
        assert_eq!(
            hex::encode(out),
            "757107ea0eb2509fc211221cce984b8a37570b6d7586c22c46f4379c8b043e17"
        );
    }

    #[test]
    fn hmac_output_is_32_bytes_for_any_key() {
        assert_eq!(hmac_sha256(b"msg", b"").len(), 32);
        assert_eq!(hmac_sha256(b"msg", &[0u8; 200]).len(), 32);
    }

    #[test]
    fn sha256_matches_published_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

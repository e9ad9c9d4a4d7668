// challenge.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::digest::sha256;

/// Proof-of-possession hash returned on successful verification:
/// base64(SHA-256(secret + crc)). Plain string concatenation keyed by
/// nothing; the secret enters as raw UTF-8 bytes here, unlike the chain.
pub fn response_hash(secret: &str, crc: &str) -> String {
    let digest = sha256(format!("{secret}{crc}").as_bytes());
    STANDARD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_secret_and_crc_map_to_fixed_hash() {
        // SHA-256 of the literal bytes "$ekrit1234", base64-encoded.
        assert_eq!(
            response_hash("$ekrit", "1234"),
            "J3CkYH9SYmo+FoGqcv3JYIGGGgRg+e4AnCiYZN6swCY="
        );
    }

    #[test]
    fn response_hash_is_deterministic() {
        assert_eq!(response_hash("s", "c"), response_hash("s", "c"));
    }

    #[test]
    fn crc_changes_the_hash() {
        assert_ne!(response_hash("$ekrit", "1234"), response_hash("$ekrit", "1235"));
    }

    #[test]
    fn concatenation_order_is_secret_then_crc() {
        assert_ne!(response_hash("ab", "cd"), response_hash("cd", "ab"));
        // "abc" + "d" and "ab" + "cd" concatenate to the same bytes.
        assert_eq!(response_hash("abc", "d"), response_hash("ab", "cd"));
    }
}

//! Password digests.
//!
//! Stored credentials are compared as opaque strings, so the scheme is fixed:
//! SHA-256 over the UTF-8 bytes, encoded as lowercase hex with two digits per
//! byte and no separators.

use sha2::{Digest, Sha256};

pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha256_vectors() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash_password("password123"),
            "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
        );
    }

    #[test]
    fn digest_is_lowercase_zero_padded_hex() {
        let digest = hash_password("alias?notI");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

//! Token verifier hashing.

use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Keyed digest over access-token material.
///
/// Storage only ever sees the HMAC output; the key stays in server
/// configuration, so a copied table cannot be used to mint or verify
/// tokens.
#[derive(Clone)]
pub struct TokenHasher {
    key: Vec<u8>,
}

impl TokenHasher {
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Digest verifier input into its stored form.
    #[must_use]
    pub fn hash(&self, input: &[u8]) -> String {
        let mut mac = self.mac();

        mac.update(input);

        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Constant-time check of verifier input against a stored digest.
    #[must_use]
    pub fn verify(&self, input: &[u8], expected: &str) -> bool {
        let Ok(expected) = URL_SAFE_NO_PAD.decode(expected) else {
            return false;
        };

        let mut mac = self.mac();

        mac.update(input);

        mac.verify_slice(&expected).is_ok()
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length")
    }
}

impl fmt::Debug for TokenHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenHasher(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = TokenHasher::new(*b"an unremarkable development key!");

        let digest = hasher.hash(b"some token material");

        assert!(hasher.verify(b"some token material", &digest));
        assert!(!hasher.verify(b"other token material", &digest));
    }

    #[test]
    fn digests_are_key_dependent() {
        let first = TokenHasher::new(*b"an unremarkable development key!");
        let second = TokenHasher::new(*b"a different development key here");

        let digest = first.hash(b"some token material");

        assert!(!second.verify(b"some token material", &digest));
    }

    #[test]
    fn garbage_digests_never_verify() {
        let hasher = TokenHasher::new(*b"an unremarkable development key!");

        assert!(!hasher.verify(b"anything", "%%% not base64 %%%"));
    }
}

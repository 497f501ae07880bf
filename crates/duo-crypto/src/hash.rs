//! SHA-256 hashing

use duo_primitives::Hash;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    Hash::from_bytes(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== NIST test vectors ====================

    #[test]
    fn sha256_empty() {
        // sha256("") = e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
        let hash = sha256(&[]);
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_abc() {
        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        let hash = sha256(b"abc");
        assert_eq!(
            hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_deterministic() {
        assert_eq!(sha256(b"duochain"), sha256(b"duochain"));
    }

    #[test]
    fn sha256_avalanche() {
        let a = sha256(b"duochain-a");
        let b = sha256(b"duochain-b");
        assert_ne!(a, b);
    }

    #[test]
    fn sha256_large_input() {
        let data = vec![0x5Au8; 1_000_000];
        let hash = sha256(&data);
        assert!(!hash.is_zero());
    }

    #[test]
    fn sha256_length_sensitive() {
        // A trailing zero byte must change the digest.
        let a = sha256(b"data");
        let mut extended = b"data".to_vec();
        extended.push(0);
        let b = sha256(&extended);
        assert_ne!(a, b);
    }
}

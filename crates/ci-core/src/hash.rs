use sha2::{Digest, Sha256};

/// Lowercase hexadecimal SHA256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

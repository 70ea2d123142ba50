use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a token. Only this digest is persisted as the
/// user's refresh-token reference.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

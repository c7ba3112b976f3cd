use sha2::{Digest, Sha256};

/// Tokens are stored and looked up by hash; the raw token never reaches
/// the blacklist.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

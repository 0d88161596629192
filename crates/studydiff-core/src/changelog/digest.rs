use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::ChangelogRow;

/// SHA-256 over the JSON form of the ordered row list, hex encoded.
///
/// Row order is part of the digest.
///
/// # Errors
///
/// `Serialization` if a row cannot be encoded.
pub fn changelog_digest(rows: &[ChangelogRow]) -> Result<String> {
    let bytes = serde_json::to_vec(rows)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

use fourier_core::errors::{ErrorInfo, FourierError};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Computes a stable SHA-256 hex digest of the JSON form of `value`.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FourierError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| FourierError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

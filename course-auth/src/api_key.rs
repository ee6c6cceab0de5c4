use crate::local_crypto::{eq_constant_time, hash_256};
use std::fmt::{Debug, Formatter};
use thiserror::Error;

/// Name of the request header carrying the shared secret.
pub const API_KEY_HEADER: &str = "api-key";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no API KEY provided")]
    Missing,
    #[error("invalid API KEY")]
    Invalid,
}

/// Holds the shared secret as a sha256 digest so the plain key
/// never sits in memory after startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    digest: String,
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("digest", &"***").finish()
    }
}

impl ApiKey {
    pub fn new<T: AsRef<str>>(secret: T) -> Self {
        Self {
            digest: hash_256(secret),
        }
    }

    /// Checks the raw value of the `api-key` header.
    /// An empty header counts as missing.
    pub fn verify(&self, provided: Option<&str>) -> Result<(), AuthError> {
        let provided = match provided {
            Some(key) if !key.is_empty() => key,
            _ => return Err(AuthError::Missing),
        };
        let digest = hash_256(provided);
        if eq_constant_time(digest.as_bytes(), self.digest.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::Invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_key() {
        let key = ApiKey::new("s3cr3t-key");
        assert_eq!(key.verify(Some("s3cr3t-key")), Ok(()));
    }

    #[test]
    fn test_verify_rejects_missing_and_empty() {
        let key = ApiKey::new("s3cr3t-key");
        assert_eq!(key.verify(None), Err(AuthError::Missing));
        assert_eq!(key.verify(Some("")), Err(AuthError::Missing));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let key = ApiKey::new("s3cr3t-key");
        assert_eq!(key.verify(Some("S3CR3T-KEY")), Err(AuthError::Invalid));
        assert_eq!(key.verify(Some("s3cr3t-key ")), Err(AuthError::Invalid));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::Missing.to_string(), "no API KEY provided");
        assert_eq!(AuthError::Invalid.to_string(), "invalid API KEY");
    }

    #[test]
    fn test_debug_hides_digest() {
        let key = ApiKey::new("s3cr3t-key");
        assert!(!format!("{:?}", key).contains(&hash_256("s3cr3t-key")));
    }
}

//! Shared-secret API key validation.

use sha2::{Digest, Sha256};

/// Strategy for validating a presented bearer credential.
pub trait CredentialValidator: Send + Sync {
    /// Returns true when the credential is acceptable.
    fn validate(&self, credential: &str) -> bool;
}

/// Validates credentials against a single configured shared secret.
///
/// The secret is held as a SHA-256 digest and candidates are compared
/// digest-to-digest. There is no per-client identity: one secret for the
/// whole service.
#[derive(Clone)]
pub struct SharedSecretValidator {
    secret_digest: String,
}

impl SharedSecretValidator {
    /// Create a validator for the configured secret.
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: Self::hash_key(secret),
        }
    }

    /// Hash an API key for storage/comparison.
    pub fn hash_key(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl CredentialValidator for SharedSecretValidator {
    fn validate(&self, credential: &str) -> bool {
        Self::hash_key(credential) == self.secret_digest
    }
}

/// Per-request context inserted once a credential has been accepted.
///
/// Carries only the leading characters of the key, for log lines.
#[derive(Debug, Clone)]
pub struct ApiKeyContext {
    /// Leading prefix of the accepted key.
    pub prefix: String,
}

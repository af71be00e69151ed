use sha2::{Digest, Sha256};

/// Computes the stored form of a password.
///
/// SHA-256 hex digest, standing in for a real KDF while authentication is
/// stubbed. Nothing outside this module should assume the digest format.
pub fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks a candidate password against a stored digest.
pub fn verify(password: &str, stored: &str) -> bool {
    digest(password) == stored
}

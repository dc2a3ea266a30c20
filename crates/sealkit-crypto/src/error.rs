//! Crypto error types.

/// Errors from passphrase encryption operations.
///
/// Format problems and authentication problems are separate variants so
/// callers can collapse them (or not) according to their own leakage
/// policy.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong secret or tampered ciphertext. The AEAD cannot tell the two
    /// apart, and neither can the caller.
    #[error("Ciphertext failed authentication")]
    AuthenticationFailed,

    /// The encoded string is not a decodable ciphertext blob.
    #[error("Ciphertext is malformed: {0}")]
    Malformed(String),
}

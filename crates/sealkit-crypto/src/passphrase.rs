//! Passphrase-based authenticated encryption.
//!
//! Encrypts opaque payloads under a shared secret using ChaCha20-Poly1305
//! with a per-message key derived via Argon2id.

use argon2::Argon2;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

use crate::error::CryptoError;

/// Salt size for Argon2id key derivation.
pub const SALT_SIZE: usize = 16;

/// Nonce size for ChaCha20-Poly1305.
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size.
const TAG_SIZE: usize = 16;

/// Authenticated encryption under a shared secret.
///
/// Every [`encrypt`](Self::encrypt) call derives a fresh key from the
/// secret and a random salt, so equal plaintexts never produce equal
/// ciphertexts. The output string is `base64url(salt ‖ nonce ‖ ciphertext)`
/// and is fully opaque to callers.
pub struct PassphraseCipher {
    secret: Zeroizing<Vec<u8>>,
}

impl PassphraseCipher {
    /// Create a cipher over the given shared secret.
    ///
    /// The secret is held in memory zeroized-on-drop.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Zeroizing::new(secret.as_ref().to_vec()),
        }
    }

    /// Encrypt `plaintext`, returning the encoded opaque string.
    ///
    /// # Errors
    /// Returns [`CryptoError::KeyDerivationFailed`] or
    /// [`CryptoError::EncryptionFailed`] on collaborator failure.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CryptoError> {
        let mut salt = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt);
        let cipher = self.derive_cipher(&salt)?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);

        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut blob = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(blob))
    }

    /// Decrypt an encoded string produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    /// Structural problems (bad encoding, truncated blob) surface as
    /// [`CryptoError::Malformed`]; a wrong secret or tampered ciphertext
    /// surfaces as [`CryptoError::AuthenticationFailed`].
    pub fn decrypt(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        let blob = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| CryptoError::Malformed(e.to_string()))?;
        if blob.len() < SALT_SIZE + NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::Malformed(format!(
                "blob too short: {} bytes",
                blob.len()
            )));
        }

        let (salt, rest) = blob.split_at(SALT_SIZE);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let cipher = self.derive_cipher(salt)?;
        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CryptoError::AuthenticationFailed)
    }

    /// Derive a ChaCha20-Poly1305 instance for `salt`.
    ///
    /// The derived key bytes are zeroized once the cipher is constructed.
    fn derive_cipher(&self, salt: &[u8]) -> Result<ChaCha20Poly1305, CryptoError> {
        let mut key_bytes = [0u8; 32];
        Argon2::default()
            .hash_password_into(&self.secret, salt, &mut key_bytes)
            .map_err(|e| CryptoError::KeyDerivationFailed(e.to_string()))?;

        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key_bytes));
        key_bytes.zeroize();
        Ok(cipher)
    }
}

//! Sealkit passphrase encryption library
//!
//! Provides the authenticated-encryption primitive behind Sealkit's opaque
//! refresh tokens: payloads encrypted under a shared secret, with tampering
//! and wrong-secret decryption detected by the AEAD tag.
//!
//! ## Crypto primitives
//!
//! - **KDF**: Argon2id over the shared secret + 16-byte random salt → 256-bit key
//! - **Encryption**: ChaCha20-Poly1305 AEAD, 12-byte random nonce
//! - **Encoding**: unpadded URL-safe base64 of `salt ‖ nonce ‖ ciphertext`

pub mod error;
pub mod passphrase;

pub use error::CryptoError;
pub use passphrase::{NONCE_SIZE, PassphraseCipher, SALT_SIZE};

//! Random token identifiers.
//!
//! Identifiers are fixed-length hex strings over CSPRNG bytes. At the
//! widths used here collision probability is negligible, so ids are
//! unique per creation without coordination.

use rand::RngCore;
use rand::rngs::OsRng;

/// Byte width of access token ids (160 bits, 40 hex chars).
pub const ACCESS_TOKEN_ID_BYTES: usize = 20;

/// Byte width of refresh token ids (320 bits, 80 hex chars).
pub const REFRESH_TOKEN_ID_BYTES: usize = 40;

/// Generate `len` cryptographically random bytes, hex-encoded.
#[must_use]
pub fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

//! Refresh token issuance and validation.
//!
//! A refresh token is an opaque encrypted bundle binding a fresh refresh
//! id to the access token it can renew. Claims are materialized only
//! after the ciphertext authenticates and the payload parses; callers
//! cannot tell a wrong secret from a tampered blob.

use std::sync::Arc;

use sealkit_crypto::{CryptoError, PassphraseCipher};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::config::RefreshTokenConfig;
use crate::error::RefreshTokenError;
use crate::ident::{self, REFRESH_TOKEN_ID_BYTES};

/// Claims carried by a refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {
    /// Unique refresh token id, fresh per issuance.
    pub refresh_token_id: String,

    /// `jti` of the access token this refresh token renews.
    pub access_token_id: String,

    /// Subject user id, copied from the caller at creation.
    pub uid: i64,

    /// Expiration (absolute Unix timestamp, seconds).
    pub expire_time: i64,
}

impl RefreshClaims {
    /// Look up a claim by name as a JSON value.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.get(key).cloned(),
            _ => None,
        }
    }
}

/// An issued refresh token: the opaque ciphertext string plus its claims.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    /// The encoded ciphertext. Fully opaque to storage layers.
    pub token: String,
    /// The claims that were encrypted.
    pub claims: RefreshClaims,
}

/// Issues and validates encrypted refresh tokens.
///
/// Immutable after construction; safe to share across threads.
pub struct RefreshTokenManager {
    cipher: PassphraseCipher,
    lifetime: std::time::Duration,
    clock: Arc<dyn Clock>,
}

impl RefreshTokenManager {
    /// Build a manager over a shared encryption secret.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>, config: RefreshTokenConfig) -> Self {
        Self {
            cipher: PassphraseCipher::new(secret),
            lifetime: config.lifetime,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for stamping and expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Issue a refresh token for `uid`, bound to `access_token_id`.
    ///
    /// Binding is by value: the access token's id is copied into the
    /// encrypted claims and the two managers never call each other.
    ///
    /// # Errors
    /// Fails with [`RefreshTokenError::Creation`] if the encryption
    /// collaborator fails. The error carries no plaintext and no
    /// collaborator detail; specifics go to the log only.
    pub fn create(
        &self,
        uid: impl Into<i64>,
        access_token_id: &str,
    ) -> Result<IssuedRefreshToken, RefreshTokenError> {
        let claims = RefreshClaims {
            refresh_token_id: ident::random_hex(REFRESH_TOKEN_ID_BYTES),
            access_token_id: access_token_id.to_string(),
            uid: uid.into(),
            expire_time: self.clock.now_unix() + self.lifetime.as_secs() as i64,
        };

        let plaintext = serde_json::to_vec(&claims).map_err(|e| {
            tracing::warn!(error = %e, "refresh claims serialization failed");
            RefreshTokenError::Creation
        })?;
        let token = self.cipher.encrypt(&plaintext).map_err(|e| {
            tracing::warn!(error = %e, "refresh token encryption failed");
            RefreshTokenError::Creation
        })?;

        tracing::debug!(
            refresh_token_id = %claims.refresh_token_id,
            uid = claims.uid,
            "issued refresh token"
        );
        Ok(IssuedRefreshToken { token, claims })
    }

    /// Validate `token` and return its claims.
    ///
    /// The caller reads `access_token_id` and `uid` from the returned
    /// record to mint the replacement access token.
    ///
    /// # Errors
    /// [`RefreshTokenError::Invalid`] for anything that fails to decrypt
    /// or parse — wrong secret, tampered ciphertext, and malformed
    /// payloads are indistinguishable to the caller.
    /// [`RefreshTokenError::Expired`] for authentic tokens strictly past
    /// their expiry.
    pub fn validate(&self, token: &str) -> Result<RefreshClaims, RefreshTokenError> {
        let plaintext = self.cipher.decrypt(token).map_err(|e| {
            // Authentication and format failures collapse into one kind;
            // the distinction stays in the log.
            match e {
                CryptoError::AuthenticationFailed => {
                    tracing::debug!("refresh token failed authentication");
                }
                other => tracing::debug!(error = %other, "refresh token undecodable"),
            }
            RefreshTokenError::Invalid
        })?;

        let claims: RefreshClaims =
            serde_json::from_slice(&plaintext).map_err(|_| RefreshTokenError::Invalid)?;

        if self.clock.now_unix() > claims.expire_time {
            tracing::debug!(refresh_token_id = %claims.refresh_token_id, "refresh token expired");
            return Err(RefreshTokenError::Expired);
        }

        Ok(claims)
    }
}

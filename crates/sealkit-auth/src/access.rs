//! Access token issuance and validation.
//!
//! Access tokens are RS256-signed JWTs carrying the claims set in
//! [`AccessClaims`]. Validation runs a fixed constraint pipeline —
//! signature, time window, optional expected id, configured issuer and
//! audience — and every constraint must hold.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::config::AccessTokenConfig;
use crate::error::AccessTokenError;
use crate::ident::{self, ACCESS_TOKEN_ID_BYTES};
use crate::keys::SigningKeys;

/// Claims carried by an access token.
///
/// Never mutated after creation; signed and serialized as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Issuer. Omitted when the manager has no issuer configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience. Omitted when the manager has no audience configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Unique token id, fresh per issuance.
    pub jti: String,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds). Always strictly after `iat`.
    pub exp: i64,

    /// Subject user id.
    pub uid: i64,

    /// Caller-supplied extension claims. Omitted when empty.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extend: Map<String, Value>,
}

impl AccessClaims {
    /// Look up a claim by name as a JSON value.
    ///
    /// Optional claims that were omitted at issuance return `None`.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.get(key).cloned(),
            _ => None,
        }
    }
}

/// An issued access token: the signed string plus the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedAccessToken {
    /// The serialized, signed token.
    pub token: String,
    /// The claims that were signed.
    pub claims: AccessClaims,
}

/// Issues and validates RS256 access tokens.
///
/// Immutable after construction; safe to share across threads.
pub struct AccessTokenManager {
    keys: SigningKeys,
    issuer: Option<String>,
    audience: Option<String>,
    lifetime: std::time::Duration,
    clock: Arc<dyn Clock>,
}

impl AccessTokenManager {
    /// Build a manager from key material and configuration.
    ///
    /// Key material may be full PEM documents or raw single-line bodies
    /// (see [`crate::keys`]). The sign/verify configuration is derived
    /// immediately. A zero lifetime is clamped to one second so `exp`
    /// stays strictly after `iat`.
    ///
    /// # Errors
    /// Fails with [`AccessTokenError::KeyFormat`] if either key cannot be
    /// parsed for RS256.
    pub fn new(
        private_key: &str,
        public_key: &str,
        config: AccessTokenConfig,
    ) -> Result<Self, AccessTokenError> {
        let keys = SigningKeys::from_material(private_key, public_key)?;
        Ok(Self {
            keys,
            issuer: non_empty(config.issuer),
            audience: non_empty(config.audience),
            lifetime: config.lifetime.max(std::time::Duration::from_secs(1)),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for stamping and expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Issue a token for `uid`, with optional extension claims.
    ///
    /// A fresh `jti` is generated on every call.
    ///
    /// # Errors
    /// Fails with [`AccessTokenError::Signing`] if the signing operation
    /// fails.
    pub fn create(
        &self,
        uid: impl Into<i64>,
        extend: Map<String, Value>,
    ) -> Result<IssuedAccessToken, AccessTokenError> {
        let iat = self.clock.now_unix();
        let claims = AccessClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            jti: ident::random_hex(ACCESS_TOKEN_ID_BYTES),
            iat,
            exp: iat + self.lifetime.as_secs() as i64,
            uid: uid.into(),
            extend,
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.keys.encoding)
            .map_err(|e| AccessTokenError::signing(e.to_string()))?;

        tracing::debug!(jti = %claims.jti, uid = claims.uid, "issued access token");
        Ok(IssuedAccessToken { token, claims })
    }

    /// Validate `token` and return its claims.
    ///
    /// All constraints must hold: the signature verifies, the clock's
    /// "now" lies within `[iat, exp]`, the token id equals
    /// `expected_jti` when one is supplied, and the issuer and audience
    /// match whatever the manager was configured with.
    ///
    /// # Errors
    /// [`AccessTokenError::Format`] for strings that are not well-formed
    /// signed documents; [`AccessTokenError::Validation`] for any failing
    /// constraint.
    pub fn validate(
        &self,
        token: &str,
        expected_jti: Option<&str>,
    ) -> Result<AccessClaims, AccessTokenError> {
        // Signature is checked during decode; the temporal and claim
        // constraints run below against the injected clock.
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        let data = decode::<AccessClaims>(token, &self.keys.decoding, &validation)?;
        let claims = data.claims;

        let now = self.clock.now_unix();
        if now < claims.iat {
            tracing::debug!(jti = %claims.jti, "token not yet valid");
            return Err(AccessTokenError::validation("token not yet valid"));
        }
        if now > claims.exp {
            tracing::debug!(jti = %claims.jti, "token expired");
            return Err(AccessTokenError::validation("token expired"));
        }

        if let Some(expected) = expected_jti {
            if claims.jti != expected {
                return Err(AccessTokenError::validation("token id mismatch"));
            }
        }

        // Issuer and audience are validated only when configured,
        // mirroring their inclusion rule at issuance.
        let expectations = [
            ("issuer", self.issuer.as_deref(), claims.iss.as_deref()),
            ("audience", self.audience.as_deref(), claims.aud.as_deref()),
        ];
        for (name, configured, presented) in expectations {
            if let Some(expected) = configured {
                if presented != Some(expected) {
                    return Err(AccessTokenError::validation(format!("{name} mismatch")));
                }
            }
        }

        Ok(claims)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

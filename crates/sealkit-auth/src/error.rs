//! Token error types.
//!
//! All cryptographic-library failures are caught at the crate boundary and
//! re-tagged into these enums; callers never see `jsonwebtoken` or AEAD
//! error types in the public API, and no failure path exposes partial
//! claims.

/// Errors from access token construction, issuance, and validation.
#[derive(Debug, thiserror::Error)]
pub enum AccessTokenError {
    /// The supplied key material cannot be parsed into an RS256 keypair.
    #[error("Invalid key material: {message}")]
    KeyFormat {
        /// Description of why the key material is invalid.
        message: String,
    },

    /// The token string is not a well-formed signed document.
    #[error("Malformed token: {message}")]
    Format {
        /// Description of why the token is malformed.
        message: String,
    },

    /// The token is well-formed but fails a validation constraint.
    #[error("Token validation failed: {constraint}")]
    Validation {
        /// The constraint that failed.
        constraint: String,
    },

    /// The signing collaborator failed while issuing a token.
    #[error("Token signing failed: {message}")]
    Signing {
        /// Description of the signing failure.
        message: String,
    },
}

impl AccessTokenError {
    /// Creates a new `KeyFormat` error.
    #[must_use]
    pub fn key_format(message: impl Into<String>) -> Self {
        Self::KeyFormat {
            message: message.into(),
        }
    }

    /// Creates a new `Format` error.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a new `Validation` error.
    #[must_use]
    pub fn validation(constraint: impl Into<String>) -> Self {
        Self::Validation {
            constraint: constraint.into(),
        }
    }

    /// Creates a new `Signing` error.
    #[must_use]
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a validation-constraint failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<jsonwebtoken::errors::Error> for AccessTokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => Self::validation("signature mismatch"),
            ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat => {
                Self::key_format(err.to_string())
            }
            ErrorKind::InvalidToken
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::format(err.to_string()),
            _ => Self::format(err.to_string()),
        }
    }
}

/// Errors from refresh token issuance and validation.
///
/// Validation failures are deliberately coarse: a wrong secret, a tampered
/// ciphertext, and an undecodable payload all surface as [`Invalid`] so
/// the error cannot be used as a decryption oracle. An authentic token
/// past its expiry is the one distinguishable, non-suspicious case.
///
/// [`Invalid`]: RefreshTokenError::Invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    /// The encryption collaborator failed while issuing a token.
    /// Carries no plaintext and no collaborator detail.
    #[error("Refresh token creation failed")]
    Creation,

    /// The token cannot be decrypted or parsed.
    #[error("Refresh token is invalid")]
    Invalid,

    /// The token is authentic but past its expiry time.
    #[error("Refresh token has expired")]
    Expired,
}

impl RefreshTokenError {
    /// Returns `true` for authentic-but-expired tokens, the one condition
    /// a caller may treat as routine (re-authenticate).
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

//! # sealkit-auth
//!
//! Access and refresh token issuance and validation for the Sealkit
//! session-credential scheme.
//!
//! This crate provides:
//! - RS256-signed access tokens carrying a typed claims set
//! - Opaque encrypted refresh tokens bound to the access token they renew
//! - PEM key normalization and RSA keypair generation
//! - A substitutable clock for deterministic expiry checks
//!
//! ## Overview
//!
//! An authentication service mints an access token with
//! [`AccessTokenManager::create`], then binds a refresh token to it with
//! [`RefreshTokenManager::create`], passing the access token's `jti`. On
//! renewal the service validates the refresh token, reads the bound
//! access-token id and uid from the returned claims, and mints a
//! replacement access token. The managers never call each other; binding
//! is by value.
//!
//! ```ignore
//! use sealkit_auth::{AccessTokenManager, AccessTokenConfig,
//!                    RefreshTokenManager, RefreshTokenConfig};
//!
//! let access = AccessTokenManager::new(&private_pem, &public_pem,
//!     AccessTokenConfig { issuer: "app".into(), ..Default::default() })?;
//! let refresh = RefreshTokenManager::new("s3cret", RefreshTokenConfig::default());
//!
//! let issued = access.create(42, Default::default())?;
//! let bound = refresh.create(42, &issued.claims.jti)?;
//!
//! // later, on renewal:
//! let claims = refresh.validate(&bound.token)?;
//! let renewed = access.create(claims.uid, Default::default())?;
//! ```
//!
//! ## Modules
//!
//! - [`access`] - Access token manager and claims
//! - [`refresh`] - Refresh token manager and claims
//! - [`keys`] - PEM normalization and keypair generation
//! - [`clock`] - Clock abstraction for expiry checks
//! - [`ident`] - Random token identifiers
//! - [`config`] - Manager configuration
//! - [`error`] - Error taxonomy

pub mod access;
pub mod clock;
pub mod config;
pub mod error;
pub mod ident;
pub mod keys;
pub mod refresh;

pub use access::{AccessClaims, AccessTokenManager, IssuedAccessToken};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AccessTokenConfig, RefreshTokenConfig};
pub use error::{AccessTokenError, RefreshTokenError};
pub use keys::{generate_rsa_keypair, normalize_private_key, normalize_public_key};
pub use refresh::{IssuedRefreshToken, RefreshClaims, RefreshTokenManager};

/// Type alias for access token operation results.
pub type AccessResult<T> = Result<T, AccessTokenError>;

/// Type alias for refresh token operation results.
pub type RefreshResult<T> = Result<T, RefreshTokenError>;

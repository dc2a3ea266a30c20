//! Manager configuration.
//!
//! Both configs deserialize from the host application's config file with
//! human-readable durations ("1h", "30d").

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Access token manager configuration.
///
/// # Example (TOML)
///
/// ```toml
/// [access_token]
/// issuer = "app"
/// audience = "web"
/// lifetime = "1h"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessTokenConfig {
    /// Issuer claim value.
    /// When empty the claim is omitted from issued tokens and not
    /// validated.
    pub issuer: String,

    /// Audience claim value. Same omission rule as `issuer`.
    pub audience: String,

    /// Access token lifetime.
    /// Shorter lifetimes are more secure but force more frequent refresh.
    #[serde(with = "humantime_serde")]
    pub lifetime: Duration,
}

impl Default for AccessTokenConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            lifetime: Duration::from_secs(3600), // 1 hour
        }
    }
}

/// Refresh token manager configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RefreshTokenConfig {
    /// Refresh token lifetime.
    /// Can be long since the token is encrypted and bound to a specific
    /// access token.
    #[serde(with = "humantime_serde")]
    pub lifetime: Duration,
}

impl Default for RefreshTokenConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(30 * 24 * 3600), // 30 days
        }
    }
}

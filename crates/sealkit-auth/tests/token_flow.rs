//! End-to-end flow tests: mint an access token, bind a refresh token to
//! it, renew through the refresh token.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use sealkit_auth::{
    AccessTokenConfig, AccessTokenManager, FixedClock, RefreshTokenConfig, RefreshTokenManager,
    generate_rsa_keypair,
};
use serde_json::Map;
use time::OffsetDateTime;

fn test_keypair() -> &'static (String, String) {
    static KEYS: OnceLock<(String, String)> = OnceLock::new();
    KEYS.get_or_init(|| generate_rsa_keypair().unwrap())
}

fn access_manager() -> AccessTokenManager {
    let (private_pem, public_pem) = test_keypair();
    AccessTokenManager::new(
        private_pem,
        public_pem,
        AccessTokenConfig {
            issuer: "app".to_string(),
            audience: "web".to_string(),
            lifetime: Duration::from_secs(3600),
        },
    )
    .unwrap()
}

#[test]
fn full_session_flow() {
    let access = access_manager();
    let refresh = RefreshTokenManager::new("s3cret", RefreshTokenConfig::default());

    // Initial authentication: access token plus bound refresh token.
    let issued = access.create(42, Map::new()).unwrap();
    let bound = refresh.create(issued.claims.uid, &issued.claims.jti).unwrap();
    assert_eq!(bound.claims.access_token_id, issued.claims.jti);
    assert_eq!(bound.claims.uid, 42);

    // The access token validates against its own id.
    access.validate(&issued.token, Some(&issued.claims.jti)).unwrap();

    // Renewal: validate the refresh token, mint a replacement access
    // token from the claims it carries.
    let claims = refresh.validate(&bound.token).unwrap();
    assert_eq!(claims.access_token_id, issued.claims.jti);

    let renewed = access.create(claims.uid, Map::new()).unwrap();
    let renewed_claims = access
        .validate(&renewed.token, Some(&renewed.claims.jti))
        .unwrap();
    assert_eq!(renewed_claims.uid, 42);
    assert_ne!(renewed.claims.jti, issued.claims.jti);
}

#[test]
fn renewal_chain_stays_bound() {
    let access = access_manager();
    let refresh = RefreshTokenManager::new("s3cret", RefreshTokenConfig::default());

    let mut current = access.create(42, Map::new()).unwrap();
    for _ in 0..3 {
        let bound = refresh.create(current.claims.uid, &current.claims.jti).unwrap();
        let claims = refresh.validate(&bound.token).unwrap();
        assert_eq!(claims.access_token_id, current.claims.jti);
        current = access.create(claims.uid, Map::new()).unwrap();
    }
}

#[test]
fn access_scenario_issuer_app_audience_web() {
    let (private_pem, public_pem) = test_keypair();
    let access = access_manager();

    let issued = access.create(42, Map::new()).unwrap();
    assert!(access.validate(&issued.token, None).is_ok());

    // Same keys, different audience: rejected.
    let other_audience = AccessTokenManager::new(
        private_pem,
        public_pem,
        AccessTokenConfig {
            issuer: "app".to_string(),
            audience: "other".to_string(),
            lifetime: Duration::from_secs(3600),
        },
    )
    .unwrap();
    assert!(other_audience.validate(&issued.token, None).is_err());
}

#[test]
fn refresh_scenario_one_month_expiry() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let refresh = RefreshTokenManager::new(
        "s3cret",
        RefreshTokenConfig {
            lifetime: Duration::from_secs(30 * 24 * 3600),
        },
    )
    .with_clock(Arc::new(FixedClock(now)));

    let issued = refresh.create(7, "abc123").unwrap();
    let claims = refresh.validate(&issued.token).unwrap();

    assert_eq!(claims.uid, 7);
    assert_eq!(claims.access_token_id, "abc123");
    assert_eq!(
        claims.expire_time,
        now.unix_timestamp() + 30 * 24 * 3600
    );
}

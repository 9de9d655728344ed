//! Token claims for issued identity tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token expiration time (1 hour)
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Subject used when a request carries no subject of its own
pub const DEFAULT_SUBJECT: &str = "dummy-user";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a normal token, expiring one hour from now
    pub fn new(subject: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }

    /// Creates claims whose expiration lapsed one hour ago
    ///
    /// Used by the forced-expired issuance path so the token's own `exp`
    /// signals expiry independently of the signing key's validity window.
    pub fn new_expired(subject: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            iat: now.timestamp(),
            exp: (now - Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_claims() {
        let claims = Claims::new(Some("alice".to_string()));

        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_default_subject() {
        let claims = Claims::new(None);

        assert_eq!(claims.sub, DEFAULT_SUBJECT);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new_expired(None);

        assert!(claims.exp < claims.iat);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new(Some("bob".to_string()));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}

//! RS256 token issuance bound to the key lifecycle manager.

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, Header};

use crate::domain::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::keys::KeyLifecycleManager;

/// Input for a single token issuance
#[derive(Debug, Clone, Default)]
pub struct IssueRequest {
    /// Subject claim; a fixed placeholder is substituted when absent
    pub subject: Option<String>,

    /// When set, sign with a disposable already-expired key and an `exp`
    /// claim in the past
    pub expired: bool,
}

/// Service issuing signed identity tokens
pub struct TokenService {
    keys: Arc<KeyLifecycleManager>,
}

impl TokenService {
    /// Creates a token service backed by the given lifecycle manager
    pub fn new(keys: Arc<KeyLifecycleManager>) -> Self {
        Self { keys }
    }

    /// Issues a signed RS256 token for the request
    ///
    /// The signing key's identifier is embedded as the `kid` header so
    /// verifiers can look up the matching published descriptor. On the
    /// forced-expired path both the token's `exp` claim and the signing
    /// key's own validity window are in the past.
    ///
    /// # Arguments
    ///
    /// * `request` - Subject and validity mode for the token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The serialized compact JWT
    /// * `Err(DomainError)` - Key generation or signing failed; the
    ///   active key state is unaffected
    pub fn issue(&self, request: IssueRequest) -> Result<String, DomainError> {
        // The active key is published before any key is used to sign,
        // so a token from the normal path is always verifiable.
        let active = self.keys.current();
        self.keys.ensure_registered(&active);

        let (key, claims) = if request.expired {
            (self.keys.mint_expired()?, Claims::new_expired(request.subject))
        } else {
            (active, Claims::new(request.subject))
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(key.kid.clone());

        let encoding_key = key.encoding_key()?;
        let token = encode(&header, &claims, &encoding_key).map_err(|e| {
            TokenError::SigningFailed {
                message: format!("JWT encoding failed: {}", e),
            }
        })?;

        tracing::debug!(kid = %key.kid, sub = %claims.sub, exp = claims.exp, "issued token");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    fn service() -> (Arc<KeyLifecycleManager>, TokenService) {
        let keys = Arc::new(KeyLifecycleManager::new().unwrap());
        (keys.clone(), TokenService::new(keys))
    }

    fn decode_with_published(
        keys: &KeyLifecycleManager,
        token: &str,
        validate_exp: bool,
    ) -> Claims {
        let kid = decode_header(token).unwrap().kid.unwrap();
        let jwks = keys.jwks();
        let jwk = jwks.find(&kid).expect("kid must resolve in published set");

        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e).unwrap();
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = validate_exp;

        decode::<Claims>(token, &decoding_key, &validation)
            .unwrap()
            .claims
    }

    #[test]
    fn test_token_has_three_segments() {
        let (_, service) = service();

        let token = service.issue(IssueRequest::default()).unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_normal_token_verifies_against_published_key() {
        let (keys, service) = service();

        let token = service
            .issue(IssueRequest {
                subject: Some("alice".to_string()),
                expired: false,
            })
            .unwrap();

        let claims = decode_with_published(&keys, token.as_str(), true);
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_default_subject_when_absent() {
        let (keys, service) = service();

        let token = service.issue(IssueRequest::default()).unwrap();
        let claims = decode_with_published(&keys, token.as_str(), true);

        assert_eq!(claims.sub, crate::domain::token::DEFAULT_SUBJECT);
    }

    #[test]
    fn test_expired_token_signals_expiry_both_ways() {
        let (keys, service) = service();

        let token = service
            .issue(IssueRequest {
                subject: None,
                expired: true,
            })
            .unwrap();

        // exp claim is in the past
        let claims = decode_with_published(&keys, token.as_str(), false);
        assert!(claims.exp < Utc::now().timestamp());

        // and the kid resolves to a descriptor distinct from the active key
        let kid = decode_header(&token).unwrap().kid.unwrap();
        assert_ne!(kid, keys.current().kid);
        assert!(keys.jwks().contains(&kid));
    }

    #[test]
    fn test_normal_issuance_after_expired_uses_valid_key() {
        let (keys, service) = service();

        let active_kid = keys.current().kid;

        service
            .issue(IssueRequest {
                subject: None,
                expired: true,
            })
            .unwrap();

        let token = service.issue(IssueRequest::default()).unwrap();
        let kid = decode_header(&token).unwrap().kid.unwrap();

        assert_eq!(kid, active_kid);

        let claims = decode_with_published(&keys, token.as_str(), true);
        assert!(claims.exp > Utc::now().timestamp());
    }
}

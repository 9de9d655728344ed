//! RSA signing-key entity and key pair generation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::EncodingKey;
use rand::Rng;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::errors::KeyError;

/// RSA modulus size in bits for generated signing keys
pub const KEY_MODULUS_BITS: usize = 2048;

/// Signing key validity window (1 hour)
pub const KEY_TTL_HOURS: i64 = 1;

/// Requested validity window for a freshly generated key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValidity {
    /// Key expires one hour from now
    Current,
    /// Key whose nominal validity lapsed one hour ago
    Expired,
}

/// An RSA key pair with its identifier and validity window
///
/// The identifier is unique for the lifetime of the process. Once a key
/// has signed a token, its identifier must stay resolvable in the
/// published key set so verifiers can look it up.
#[derive(Clone)]
pub struct SigningKey {
    /// Opaque unique key identifier (`kid` header value)
    pub kid: String,

    /// Private key material, used only for signing
    pub private_key: RsaPrivateKey,

    /// Public key material, published via the JWKS
    pub public_key: RsaPublicKey,

    /// Absolute expiration instant of this key's validity window
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for SigningKey {
    // Private key material must never leak through Debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("kid", &self.kid)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl SigningKey {
    /// Generates a fresh RSA key pair with the requested validity window
    ///
    /// # Arguments
    ///
    /// * `validity` - Whether the key should be current or already expired
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - A new key with a unique identifier
    /// * `Err(KeyError)` - The cryptographic backend failed
    pub fn generate(validity: KeyValidity) -> Result<Self, KeyError> {
        let mut rng = rand::thread_rng();

        let private_key = RsaPrivateKey::new(&mut rng, KEY_MODULUS_BITS)
            .map_err(|e| KeyError::GenerationFailed {
                message: format!("RSA key pair generation failed: {}", e),
            })?;
        let public_key = private_key.to_public_key();

        // 128 bits of entropy, hex-encoded
        let mut kid_bytes = [0u8; 16];
        rng.fill(&mut kid_bytes[..]);
        let kid = hex::encode(kid_bytes);

        let expires_at = match validity {
            KeyValidity::Current => Utc::now() + Duration::hours(KEY_TTL_HOURS),
            KeyValidity::Expired => Utc::now() - Duration::hours(KEY_TTL_HOURS),
        };

        tracing::debug!(kid = %kid, %expires_at, "generated RSA signing key");

        Ok(Self {
            kid,
            private_key,
            public_key,
            expires_at,
        })
    }

    /// Returns the JWT encoding key derived from the private key material
    pub fn encoding_key(&self) -> Result<EncodingKey, KeyError> {
        let der = self
            .private_key
            .to_pkcs1_der()
            .map_err(|e| KeyError::EncodingFailed {
                message: format!("PKCS#1 DER encoding failed: {}", e),
            })?;

        Ok(EncodingKey::from_rsa_der(der.as_bytes()))
    }

    /// Checks whether the key's validity window has lapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_current_key() {
        let key = SigningKey::generate(KeyValidity::Current).unwrap();

        assert_eq!(key.kid.len(), 32); // 16 bytes hex-encoded
        assert!(key.expires_at > Utc::now());
        assert!(!key.is_expired());
    }

    #[test]
    fn test_generate_expired_key() {
        let key = SigningKey::generate(KeyValidity::Expired).unwrap();

        assert!(key.expires_at < Utc::now());
        assert!(key.is_expired());
    }

    #[test]
    fn test_key_identifiers_are_unique() {
        let a = SigningKey::generate(KeyValidity::Current).unwrap();
        let b = SigningKey::generate(KeyValidity::Current).unwrap();

        assert_ne!(a.kid, b.kid);
    }

    #[test]
    fn test_encoding_key_derivation() {
        let key = SigningKey::generate(KeyValidity::Current).unwrap();

        assert!(key.encoding_key().is_ok());
    }

    #[test]
    fn test_debug_omits_private_material() {
        let key = SigningKey::generate(KeyValidity::Current).unwrap();
        let debug = format!("{:?}", key);

        assert!(debug.contains(&key.kid));
        assert!(!debug.contains("private"));
    }
}

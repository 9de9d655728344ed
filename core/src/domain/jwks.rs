//! Published key descriptors and the JSON Web Key Set.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rsa::traits::PublicKeyParts;
use serde::{Deserialize, Serialize};

use crate::domain::keys::SigningKey;

/// Standard fixed RSA public exponent (65537), base64url-encoded
pub const RSA_PUBLIC_EXPONENT: &str = "AQAB";

/// Public projection of a signing key, as served in the JWKS
///
/// Derived deterministically from a [`SigningKey`]; never carries private
/// key material. Verifiers rely on byte-for-byte correctness of `n` to
/// validate signatures made with the corresponding private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key identifier, matching the `kid` JWT header of signed tokens
    pub kid: String,

    /// Key type, always `"RSA"`
    pub kty: String,

    /// Intended use, always `"sig"`
    #[serde(rename = "use")]
    pub key_use: String,

    /// Signature algorithm, always `"RS256"`
    pub alg: String,

    /// Modulus: base64url (no padding) of the big-endian modulus bytes
    pub n: String,

    /// Public exponent, always `"AQAB"`
    pub e: String,
}

impl Jwk {
    /// Derives the published descriptor from a signing key's public material
    pub fn from_signing_key(key: &SigningKey) -> Self {
        let n = URL_SAFE_NO_PAD.encode(key.public_key.n().to_bytes_be());

        Self {
            kid: key.kid.clone(),
            kty: "RSA".to_string(),
            key_use: "sig".to_string(),
            alg: "RS256".to_string(),
            n,
            e: RSA_PUBLIC_EXPONENT.to_string(),
        }
    }
}

/// Ordered collection of published key descriptors, keyed by `kid`
///
/// Starts empty, grows monotonically as keys are registered, and never
/// shrinks within the process lifetime. Serializes to the standard JWKS
/// document shape `{"keys": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Creates an empty key set
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a signing key's public descriptor
    ///
    /// Idempotent: re-registering an identifier already in the set is a
    /// no-op, not an error.
    pub fn register(&mut self, key: &SigningKey) {
        if !self.contains(&key.kid) {
            self.keys.push(Jwk::from_signing_key(key));
        }
    }

    /// Returns the published descriptors in registration order
    pub fn keys(&self) -> &[Jwk] {
        &self.keys
    }

    /// Looks up a descriptor by key identifier
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|jwk| jwk.kid == kid)
    }

    /// Checks whether a key identifier is present
    pub fn contains(&self, kid: &str) -> bool {
        self.find(kid).is_some()
    }

    /// Returns the number of published keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Checks whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

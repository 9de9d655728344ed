//! Key lifecycle management: the active signing key and the published set.

use std::sync::Mutex;

use crate::domain::jwks::JwkSet;
use crate::domain::keys::{KeyValidity, SigningKey};
use crate::errors::KeyError;

/// The mutable key state: the single active signing key plus everything
/// published so far. One lock covers both so a rotation and a concurrent
/// registration cannot race into a lost update.
struct KeyState {
    active: SigningKey,
    published: JwkSet,
}

/// Owns the active signing key and the published verification-key set
///
/// An explicit context object rather than process-global state, so each
/// test can run against its own independent instance. The active key is
/// only ever replaced wholesale, never edited in place, and every key
/// that signs a token is discoverable in the published set no later than
/// the moment it is used.
pub struct KeyLifecycleManager {
    state: Mutex<KeyState>,
}

impl KeyLifecycleManager {
    /// Creates a manager with a freshly generated, non-expired active key
    ///
    /// The initial key is registered immediately, so a verification-key
    /// fetch before any signing activity already resolves it.
    ///
    /// # Returns
    ///
    /// * `Ok(KeyLifecycleManager)` - Manager with one active, published key
    /// * `Err(KeyError)` - Key generation failed; the process cannot
    ///   safely issue tokens and should not start
    pub fn new() -> Result<Self, KeyError> {
        let active = SigningKey::generate(KeyValidity::Current)?;
        let mut published = JwkSet::new();
        published.register(&active);

        tracing::info!(kid = %active.kid, "initialized active signing key");

        Ok(Self {
            state: Mutex::new(KeyState { active, published }),
        })
    }

    /// Returns a copy of the current active signing key, without mutation
    pub fn current(&self) -> SigningKey {
        self.lock().active.clone()
    }

    /// Guarantees the given key has an entry in the published set
    ///
    /// Idempotent; registering an already-published identifier changes
    /// nothing.
    pub fn ensure_registered(&self, key: &SigningKey) {
        self.lock().published.register(key);
    }

    /// Generates a disposable, already-expired signing key for forced-expired
    /// token issuance
    ///
    /// The key is registered in the published set so a verifier can resolve
    /// its identifier, inspect its lapsed validity window, and reject the
    /// token on temporal grounds rather than failing the key lookup. The
    /// active key reference is left untouched: forced-expired issuance is
    /// out-of-band, and later normal issuance keeps using the valid key.
    pub fn mint_expired(&self) -> Result<SigningKey, KeyError> {
        let key = SigningKey::generate(KeyValidity::Expired)?;

        let mut state = self.lock();
        state.published.register(&key);

        tracing::info!(kid = %key.kid, "minted expired signing key");

        Ok(key)
    }

    /// Returns a snapshot of the published verification-key set
    pub fn jwks(&self) -> JwkSet {
        self.lock().published.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, KeyState> {
        self.state.lock().expect("key state lock poisoned")
    }
}

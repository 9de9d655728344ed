//! Domain entities for key management and token issuance.

pub mod jwks;
pub mod keys;
pub mod token;

pub use jwks::{Jwk, JwkSet};
pub use keys::{KeyValidity, SigningKey};
pub use token::Claims;

//! # KeyServe Core
//!
//! Core logic for the KeyServe identity-token issuer: RSA signing-key
//! generation, the published JSON Web Key Set, the key lifecycle manager,
//! and RS256 token issuance. This crate has no knowledge of HTTP; the
//! `keyserve_api` crate provides the transport layer on top of it.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, Jwk, JwkSet, KeyValidity, SigningKey};
pub use errors::{DomainError, DomainResult, KeyError, TokenError};
pub use services::{IssueRequest, KeyLifecycleManager, TokenService};

//! Route handlers for the issuer's two endpoints.

pub mod auth;
pub mod jwks;

//! HTTP transport layer for the KeyServe token issuer.
//!
//! Thin actix-web glue over `keyserve_core`: two routes, request/response
//! DTOs, and error mapping. All key and token logic lives in the core
//! crate.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;

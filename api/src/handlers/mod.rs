//! Cross-cutting request handling helpers.

pub mod error_handler;

pub use error_handler::handle_domain_error;

//! Request and response data transfer objects.

mod auth_dto;
mod error_dto;

pub use auth_dto::{AuthQuery, AuthRequest};
pub use error_dto::ErrorResponse;

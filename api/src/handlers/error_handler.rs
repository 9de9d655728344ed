use actix_web::{http::StatusCode, HttpResponse};

use keyserve_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Maps a core error to a 500 response with a generic body
///
/// The detail stays in the server log; the response never exposes key
/// material or backend error text.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("API Error: {:?}", error);

    let error_response = ErrorResponse::new(
        "internal_error".to_string(),
        "An internal error occurred".to_string(),
    );

    error_response.to_response(StatusCode::INTERNAL_SERVER_ERROR)
}

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Generic JSON error body; never carries key material
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

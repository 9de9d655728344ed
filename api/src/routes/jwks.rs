use actix_web::{web, HttpResponse};

use crate::app::AppState;

/// Handler for GET /.well-known/jwks.json
///
/// Returns every published verification key in registration order. The
/// active key is published at startup, so even the very first request
/// sees a non-empty set.
pub async fn get_jwks(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.keys.jwks())
}

use actix_web::{web, HttpResponse};

use keyserve_core::services::token::IssueRequest;

use crate::app::AppState;
use crate::dto::{AuthQuery, AuthRequest};
use crate::handlers::handle_domain_error;

/// Handler for POST /auth
///
/// Issues a signed RS256 token. The optional JSON body may carry a
/// `username` used as the subject; a malformed or absent body is treated
/// as empty rather than rejected. `?expired=true` selects the
/// forced-expired issuance path.
///
/// # Response
///
/// 200 with `Content-Type: text/plain` and the compact JWT as the body,
/// or 500 on a signing failure.
pub async fn issue_token(
    state: web::Data<AppState>,
    query: web::Query<AuthQuery>,
    body: web::Bytes,
) -> HttpResponse {
    // Raw bytes, not web::Json: a body that fails to parse falls back to
    // defaults instead of a 400.
    let request: AuthRequest = serde_json::from_slice(&body).unwrap_or_default();

    let issue = IssueRequest {
        subject: request.username,
        expired: query.wants_expired(),
    };

    match state.tokens.issue(issue) {
        Ok(token) => HttpResponse::Ok().content_type("text/plain").body(token),
        Err(error) => handle_domain_error(error),
    }
}

//! Application state and route configuration.

use std::sync::Arc;

use actix_web::web;

use keyserve_core::errors::DomainError;
use keyserve_core::services::keys::KeyLifecycleManager;
use keyserve_core::services::token::TokenService;

use crate::routes;

/// Shared application state handed to every request handler
pub struct AppState {
    pub keys: Arc<KeyLifecycleManager>,
    pub tokens: TokenService,
}

/// Builds the application state, generating the initial signing key
///
/// # Returns
///
/// * `Ok(web::Data<AppState>)` - State with one active, published key
/// * `Err(DomainError)` - Initial key generation failed; the process
///   cannot safely start
pub fn build_state() -> Result<web::Data<AppState>, DomainError> {
    let keys = Arc::new(KeyLifecycleManager::new()?);
    let tokens = TokenService::new(keys.clone());

    Ok(web::Data::new(AppState { keys, tokens }))
}

/// Registers the issuer's routes on an actix-web service config
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/.well-known/jwks.json",
        web::get().to(routes::jwks::get_jwks),
    )
    .route("/auth", web::post().to(routes::auth::issue_token));
}

use actix_web::{middleware::Logger, App, HttpServer};
use log::info;

use keyserve_api::app;

/// Fixed listening address; the issuer takes no external configuration
const BIND_ADDRESS: (&str, u16) = ("127.0.0.1", 8080);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting KeyServe token issuer");

    // Generates the initial signing key; a backend failure here means the
    // process cannot sign anything and must not come up.
    let state = app::build_state()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    info!(
        "Server listening on http://{}:{}",
        BIND_ADDRESS.0, BIND_ADDRESS.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(app::configure_routes)
    })
    .bind(BIND_ADDRESS)?
    .run()
    .await
}

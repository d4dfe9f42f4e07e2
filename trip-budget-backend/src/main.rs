//! Backend crate for the trip budget web app.
//!
//! Uses actix to serve the static planning page and the single calculation
//! endpoint behind a permissive CORS policy.

pub mod calculator;
pub mod web_app;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

const BIND_ADDR: (&str, u16) = ("127.0.0.1", 5000);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("trip budget backend listening on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .service(web_app::calculate_trip)
            // Static front end, registered last so it only catches what the
            // API routes did not
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}

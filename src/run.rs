use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::routes::{create_booking, health_check, json_error_handler, waiver_form};
use crate::storage::BookingStore;
use crate::webhook::Relay;

/// Wires routes to the given store and relay and starts serving on `listener`.
pub fn run(
    listener: TcpListener,
    store: Arc<dyn BookingStore>,
    relay: Arc<dyn Relay>,
) -> Result<Server, std::io::Error> {
    let store = web::Data::from(store);
    let relay = web::Data::from(relay);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // bodies are parsed as JSON whatever `Content-Type` says, or without one.
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .content_type(|_| true)
                    .error_handler(json_error_handler),
            )
            .route("/", web::get().to(waiver_form))
            .route("/health", web::get().to(health_check))
            .route("/api/bookings", web::post().to(create_booking))
            .app_data(store.clone())
            .app_data(relay.clone())
    })
    .listen(listener)?
    .run())
}

use actix_web::{HttpResponse, Responder};
use uuid::Uuid;

/// Liveness only: the database and webhook are not contacted.
pub async fn health_check() -> impl Responder {
    let request_id = Uuid::new_v4();
    let _span = tracing::debug_span!("Checking service health", %request_id).entered();

    HttpResponse::Ok()
}

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// The waiver page. It posts to `/api/bookings` with `bookingTime` built as
/// `<date>T<time>`.
pub async fn waiver_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("waiver.html"))
}

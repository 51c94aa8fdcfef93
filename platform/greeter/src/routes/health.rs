use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

pub const HEALTHY: &str = "Application is healthy";

/// Liveness/readiness probe. Always 200 while the process can serve HTTP.
pub async fn check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HEALTHY)
}

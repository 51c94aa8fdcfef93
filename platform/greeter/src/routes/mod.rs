use actix_web::web;

pub mod health;
pub mod message;

/// Registers `/` and `/health`. Both answer GET and HEAD; any other method on
/// those paths gets 405, unknown paths fall through to 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(message::handler))
            .route(web::head().to(message::handler)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health::check))
            .route(web::head().to(health::check)),
    );
}

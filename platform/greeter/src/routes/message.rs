use crate::config::Config;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

pub async fn handler(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(config.message.clone())
}

pub mod config;
pub mod error;
pub mod logger;
pub mod routes;

pub use crate::config::Config;
pub use crate::error::Error;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;

pub fn run(listener: TcpListener, config: Config) -> Result<Server, Error> {
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

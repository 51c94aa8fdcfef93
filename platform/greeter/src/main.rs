use greeter::{logger, run, Config, Error};
use std::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logger::init_tracing();

    if let Err(e) = serve().await {
        error!("greeter failed: {}", e);
        // RUST_LOG may filter out the event above.
        eprintln!("greeter failed: {}", e);
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Error> {
    let config = Config::from_env()?;
    let address = config.bind_address();

    let listener = TcpListener::bind(&address).map_err(|source| Error::Bind {
        address: address.clone(),
        source,
    })?;

    info!(
        "listening on {} (message: {} bytes)",
        address,
        config.message.len()
    );

    run(listener, config)?.await?;

    info!("server stopped");
    Ok(())
}

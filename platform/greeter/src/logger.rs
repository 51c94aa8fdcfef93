use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "greeter=info,actix_web=info";

/// Installs the global subscriber, writing to stderr. `RUST_LOG` overrides the
/// default filter. Also forwards `log` records, which the actix `Logger`
/// middleware emits.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .try_init()
        .map_err(|_err| eprintln!("Unable to set global default subscriber"));
}

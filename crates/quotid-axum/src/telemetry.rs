use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Developer environments get pretty, colored output at `debug`;
/// everything else logs JSON lines at `info`, one record per event, ready
/// for a log shipper. `RUST_LOG` overrides the level either way.
pub fn init_telemetry(dev: bool) {
    let default_level = if dev { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());
    let registry = tracing_subscriber::registry().with(filter);

    if dev {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .pretty(),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}

use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Composes the layers that turn spans and events into bunyan formatted JSON lines.
///
/// `RUST_LOG` wins over `filter` when it is set. The sink is generic so tests can
/// hand in `std::io::sink` and keep their output quiet.
pub fn get_subscriber<Sink>(
    name: String,
    filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Failed to redirect `log` records into tracing")]
    Logger(#[from] tracing::log::SetLoggerError),

    #[error("Failed to install the global tracing subscriber")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs `subscriber` as the process wide default. Can only succeed once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    // sqlx and reqwest still speak `log`.
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

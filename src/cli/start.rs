use crate::cli::{actions::Action, commands, dispatch};
use anyhow::Result;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime::Tokio, trace, Resource};
use std::time::Duration;
use tracing::Level;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Parse the command line, wire up tracing and return the action to run
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches.get_one::<u8>("verbosity").copied().unwrap_or(0);
    init_tracing(verbosity)?;

    dispatch::handler(&matches)
}

const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Log lines go to stdout, spans to the OTLP collector. A RUST_LOG
// directive still overrides the -v count.
fn init_tracing(verbosity: u8) -> Result<()> {
    let resource = Resource::new([
        KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_timeout(Duration::from_secs(5)),
        )
        .with_trace_config(trace::config().with_resource(resource))
        .install_batch(Tokio)?;

    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let subscriber = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(OpenTelemetryLayer::new(tracer));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_maps_verbosity_counts() {
        assert_eq!(level_for(0), Level::ERROR);
        assert_eq!(level_for(1), Level::WARN);
        assert_eq!(level_for(2), Level::INFO);
        assert_eq!(level_for(3), Level::DEBUG);
        assert_eq!(level_for(4), Level::TRACE);
        assert_eq!(level_for(255), Level::TRACE);
    }
}

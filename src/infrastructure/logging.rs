use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogFormat, LoggingConfig};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Development mode adds
/// targets and span close events to the output.
pub fn init_logging(config: &LoggingConfig, environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let verbose = !environment.is_production();
    let span_events = if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE };

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(span_events))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(verbose)
                        .with_span_events(span_events),
                )
                .init();
        }
    }

    tracing::info!(
        level = %config.level,
        environment = %environment,
        "Logging initialized"
    );
}

//! Tracing (logging)

use crate::cli::CommandLineArgs;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initlialise tracing (logging)
///
/// Applies a filter based on the `RUST_LOG` environment variable, falling back to enable debug
/// logging for this crate and tower_http if not set. Traces are additionally sent to Jaeger when
/// enabled on the command line.
pub fn init_tracing(args: &CommandLineArgs) {
    let jaeger_layer = if args.enable_jaeger {
        match opentelemetry_jaeger::new_agent_pipeline()
            .with_service_name("launch-dashboard")
            .install_batch(opentelemetry::runtime::Tokio)
        {
            Ok(tracer) => Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            Err(err) => {
                eprintln!("Failed to initialise Jaeger tracer: {}", err);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launch_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(jaeger_layer)
        .init();
}

/// Flush and shut down any trace exporters.
pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}

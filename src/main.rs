//! This file defines the launch-dashboard binary entry point.

use launch_dashboard::app;
use launch_dashboard::cli;
use launch_dashboard::dataset::Dataset;
use launch_dashboard::metrics;
use launch_dashboard::server;
use launch_dashboard::tracing;

use std::process::exit;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing(&args);
    if let Err(err) = metrics::register_metrics() {
        eprintln!("Failed to register metrics: {}", err);
        exit(1)
    }
    // The dashboard cannot serve anything without its launch records.
    let dataset = match Dataset::from_path(&args.data_file) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("{}", err);
            let mut current = std::error::Error::source(&err);
            while let Some(source) = current {
                eprintln!("Caused by: {}", source);
                current = source.source();
            }
            exit(1)
        }
    };
    let service = app::service(dataset);
    server::serve(&args, service).await;
    tracing::shutdown_tracing();
}

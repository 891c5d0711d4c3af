//! Web server

use crate::cli;

use std::{net::SocketAddr, path::PathBuf, process::exit, str::FromStr, time::Duration};

use axum::ServiceExt;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use expanduser::expanduser;
use tokio::signal;
use tracing::{event, Level};

/// Serve the launch dashboard
///
/// # Arguments
///
/// * `args`: Command line arguments
/// * `service`: The [crate::app::Service] to serve
pub async fn serve(args: &cli::CommandLineArgs, service: crate::app::Service) {
    let addr = match SocketAddr::from_str(&format!("{}:{}", args.host, args.port)) {
        Ok(addr) => addr,
        Err(err) => {
            event!(Level::ERROR, "invalid host name, IP address or port number: {}", err);
            exit(1)
        }
    };

    // Catch ctrl+c and try to shutdown gracefully
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(
        handle.clone(),
        args.graceful_shutdown_timeout,
    ));

    let result = if args.https {
        let cert_file = tls_file(&args.cert_file, "certificate");
        let key_file = tls_file(&args.key_file, "key");
        // Set up TLS config
        let tls_config = match RustlsConfig::from_pem_file(cert_file, key_file).await {
            Ok(tls_config) => tls_config,
            Err(err) => {
                event!(Level::ERROR, "failed to load TLS certificate files: {}", err);
                exit(1)
            }
        };
        event!(Level::INFO, "dashboard listening on https://{}", addr);
        // run HTTPS server with hyper
        axum_server::bind_rustls(addr, tls_config)
            .handle(handle)
            .serve(service.into_make_service())
            .await
    } else {
        event!(Level::INFO, "dashboard listening on http://{}", addr);
        // run HTTP server with hyper
        axum_server::bind(addr)
            .handle(handle)
            .serve(service.into_make_service())
            .await
    };

    if let Err(err) = result {
        event!(Level::ERROR, "server error: {}", err);
        exit(1)
    }
}

/// Resolve a TLS file path, exiting if it cannot be found.
///
/// # Arguments
///
/// * `path`: Path to the file, which may start with `~`
/// * `kind`: Description of the file for error messages
fn tls_file(path: &str, kind: &str) -> PathBuf {
    let expanded = match expanduser(path) {
        Ok(expanded) => expanded,
        Err(err) => {
            event!(
                Level::ERROR,
                "Failed to expand ~ in TLS {} path {}: {}. Please provide an absolute path instead.",
                kind,
                path,
                err
            );
            exit(1)
        }
    };
    match expanded.canonicalize() {
        Ok(abs_path) => abs_path,
        Err(_) => {
            event!(
                Level::ERROR,
                "TLS {} file expected at '{}' but not found.",
                kind,
                expanded.display()
            );
            exit(1)
        }
    }
}

/// Graceful shutdown handler
///
/// Installs signal handlers to catch Ctrl-C or SIGTERM and trigger a graceful shutdown.
async fn shutdown_signal(handle: Handle, timeout: u64) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            event!(Level::ERROR, "failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                event!(Level::ERROR, "failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    event!(Level::INFO, "signal received, starting graceful shutdown");
    // Force shutdown if graceful shutdown takes longer than the timeout
    handle.graceful_shutdown(Some(Duration::from_secs(timeout)));
}

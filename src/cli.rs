//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Launch dashboard command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the dashboard should listen
    #[arg(long, default_value = "0.0.0.0", env = "LAUNCH_DASHBOARD_HOST")]
    pub host: String,
    /// The port to which the dashboard should bind
    #[arg(long, default_value_t = 8050, env = "LAUNCH_DASHBOARD_PORT")]
    pub port: u16,
    /// Path to the CSV file of launch records
    #[arg(
        long,
        default_value = "spacex_launch_dash.csv",
        env = "LAUNCH_DASHBOARD_DATA_FILE"
    )]
    pub data_file: String,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "LAUNCH_DASHBOARD_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/launch-dashboard/certs/cert.pem",
        env = "LAUNCH_DASHBOARD_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/launch-dashboard/certs/key.pem",
        env = "LAUNCH_DASHBOARD_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for requests to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "LAUNCH_DASHBOARD_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
    /// Whether to enable sending traces to Jaeger.
    #[arg(long, default_value_t = false, env = "LAUNCH_DASHBOARD_ENABLE_JAEGER")]
    pub enable_jaeger: bool,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}

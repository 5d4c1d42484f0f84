//! Process bootstrap shared by the four server binaries.
//!
//! Initializes logging, loads configuration, builds the protocol session
//! for the given domain and runs the configured transports. Startup
//! faults (duplicate tool name, port in use) log to stderr and exit
//! non-zero via the returned error.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use super::config::Config;
use super::server::UtilityServer;
use super::transport::TransportService;
use crate::domains::Domain;

/// Run one utility server to completion.
pub async fn run(domain: Domain) -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    let server_name = config.server.name.as_deref().unwrap_or(domain.name);

    info!("Starting {} v{}", server_name, domain.version);

    let server = UtilityServer::new(&domain, server_name)?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Output goes to stderr: stdout may be carrying protocol frames.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

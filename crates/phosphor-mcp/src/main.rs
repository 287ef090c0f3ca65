//! Phosphor Icons MCP Server
//!
//! A Model Context Protocol server that serves Phosphor icons as SVG to
//! agentic IDEs.
//!
//! # Usage
//!
//! ```bash
//! phosphor-mcp [--config <path>] [--default-weight <weight>] [--verbose]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (overrides `--verbose`; default: `phosphor_mcp=info`)
//! - `PHOSPHOR_DEFAULT_WEIGHT`, `PHOSPHOR_BASE_URL`, `PHOSPHOR_TIMEOUT_SECS`,
//!   `PHOSPHOR_BATCH_CONCURRENCY`, `PHOSPHOR_CATALOG`: same as the flags
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use phosphor_core::{IconService, SettingsLayer, SettingsLoader, Weight};
use phosphor_mcp::PhosphorMcpServer;

/// MCP server for Phosphor Icons
#[derive(Parser)]
#[command(name = "phosphor-mcp")]
#[command(about = "MCP server for Phosphor Icons")]
#[command(version)]
struct Args {
    /// Config file (default: <config dir>/phosphor-mcp/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Weight used when a request does not specify one
    #[arg(long, env = "PHOSPHOR_DEFAULT_WEIGHT")]
    default_weight: Option<Weight>,

    /// Root URL of the icon assets
    #[arg(long, env = "PHOSPHOR_BASE_URL")]
    base_url: Option<String>,

    /// Per-icon fetch timeout in seconds
    #[arg(long, env = "PHOSPHOR_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Concurrent fetches for get-multiple-icons
    #[arg(long, env = "PHOSPHOR_BATCH_CONCURRENCY")]
    batch_concurrency: Option<usize>,

    /// Catalog TOML file replacing the built-in catalog
    #[arg(long, env = "PHOSPHOR_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings_layer(&self) -> SettingsLayer {
        SettingsLayer {
            default_weight: self.default_weight,
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: None,
            batch_concurrency: self.batch_concurrency,
            catalog_path: self.catalog.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging to stderr (stdout is reserved for MCP protocol).
    // RUST_LOG replaces the default filter entirely when set.
    let default_filter = if args.verbose {
        "phosphor_mcp=debug,phosphor_core=debug"
    } else {
        "phosphor_mcp=info,phosphor_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut loader = SettingsLoader::new();
    if let Some(ref path) = args.config {
        loader = loader.with_file(path);
    }
    let mut settings = loader.load()?;
    settings.merge(&args.settings_layer());

    tracing::info!(
        default_weight = %settings.default_weight,
        base_url = %settings.base_url,
        "Starting phosphor-mcp server"
    );

    let service = IconService::from_settings(&settings)?;
    let mut server = PhosphorMcpServer::new(service);
    server.initialize();
    server.run().await?;

    Ok(())
}

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use juno_mcp::{build_registry, RegistryOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = juno_config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { tools, read_only } => {
            let opts = RegistryOptions {
                allowed_names: tools,
                read_only,
            };
            let registry = Arc::new(build_registry(&config, &opts));
            tracing::info!(tools = ?registry.names(), "starting MCP stdio server");
            juno_mcp::serve_stdio(registry).await
        }
        Commands::ListTools { read_only } => {
            let opts = RegistryOptions {
                allowed_names: None,
                read_only,
            };
            let registry = build_registry(&config, &opts);
            for schema in registry.schemas() {
                let summary = schema.description.split('.').next().unwrap_or_default();
                println!("{:<24} {}.", schema.name, summary.trim());
            }
            Ok(())
        }
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Route all diagnostics to stderr; stdout is reserved for the MCP
/// transport.  RUST_LOG overrides the -v flag when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

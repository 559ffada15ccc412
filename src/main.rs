use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use keycloak_admin_agent::config::loader::load_config;
use keycloak_admin_agent::keycloak::client::AdminClient;
use keycloak_admin_agent::tools::Registry;
use keycloak_admin_agent::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;
use keycloak_admin_agent::utils::logging;
use keycloak_admin_agent::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "keycloak-agent.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered admin tool
    List,
    /// Invoke one tool with JSON arguments
    Call {
        name: String,
        #[arg(default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Parse arguments, load config, init logging
    // -------------------------------

    let args = Args::parse();
    let config = load_config(&args.config)?;
    logging::init(&config, args.log_level);

    info!(
        url = %config.keycloak.url,
        auth_mode = ?config.keycloak.auth_mode,
        "starting keycloak-admin-agent"
    );

    // -------------------------------
    // 2. Build the admin client and tool registry
    // -------------------------------

    let http = Client::builder()
        .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
        .build()?;
    let client = Arc::new(AdminClient::new(config.keycloak.clone(), http));
    let registry = Registry::with_all_tools();

    // -------------------------------
    // 3. Dispatch the subcommand
    // -------------------------------

    match args.command {
        Command::List => {
            for tool in registry.tools() {
                println!("{:<36} {}", tool.name, tool.description);
            }
        }
        Command::Call { name, args: raw } => {
            let value: Value = serde_json::from_str(&raw)
                .with_context(|| format!("arguments for '{name}' are not valid JSON"))?;
            let reply = registry.invoke(client, &name, value).await?;
            println!("{}", reply.text);
            if reply.is_error {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use platform_upstream::EmployeeClient;
use tracing::info;

use server::{
    config::AppConfig,
    http::{self, AppState, ServeConfig},
    service::EmployeeService,
};

#[derive(Parser, Debug)]
#[command(name = "staffdir-server", version, about = "Employee directory façade")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP façade.
    Serve(ServeCommand),
    /// Probe the upstream employee service and exit.
    Check,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, config).await,
        Command::Check => run_check(config).await,
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let client = EmployeeClient::new(&config.upstream)?;
    let service = EmployeeService::new(client);
    let state = AppState {
        service,
        config: config.clone(),
    };
    http::serve(cmd.into(), state).await
}

async fn run_check(config: Arc<AppConfig>) -> Result<()> {
    let client = EmployeeClient::new(&config.upstream)?;
    let records = client.fetch_all().await?;
    info!(
        count = records.len(),
        upstream = %config.upstream.base_url,
        "upstream employee service reachable"
    );
    Ok(())
}

use crate::prelude::*;
use clap::Parser;
use std::sync::Arc;

mod client;
mod config;
mod error;
mod mcp;
mod news;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "MCP server exposing Gloria AI curated crypto news to LLM agents"
)]
pub struct App {
    #[clap(flatten)]
    server: ServerOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerOptions {
    /// ai-hub API token
    #[arg(long, env = "GLORIA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// ai-hub API base URL
    #[arg(long, env = "AI_HUB_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: Option<String>,

    /// MCP transport: `stdio` or `streamable-http`
    #[arg(long, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: String,

    /// Port for the streamable HTTP transport
    #[arg(long, env = "MCP_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "GLORIA_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

fn init_logging(global: &Global) {
    let default_filter = if global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();

    init_logging(&app.global);
    color_eyre::install()?;

    let config = config::GloriaConfig::new(app.server.api_token, app.server.base_url)
        .map_err(|err| eyre!(err))?;
    let client = client::GloriaClient::new(&config);
    debug!("Using ai-hub at {}", client.base_url());

    let state = Arc::new(mcp::ServerState::new(client));

    let outcome = match config::Transport::from_name(&app.server.transport) {
        config::Transport::StreamableHttp => mcp::run_http(state.clone(), app.server.port).await,
        config::Transport::Stdio => mcp::run_stdio(state.clone()).await,
    };

    state.client.close().await;

    outcome
}

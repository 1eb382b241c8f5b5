//! CLI entry point for the recommendation agent.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tripscout_agent::llm::ChatCompletionsClient;
use tripscout_agent::places::GooglePlacesClient;
use tripscout_agent::{Agent, AgentConfig, Result};

/// TripScout - Parse a travel request, search places, and rank recommendations.
#[derive(Parser)]
#[command(name = "tripscout")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Free-text travel request (e.g. "cheap ramen in Shinjuku, want outdoor seating")
    request: String,

    /// Only parse the request into search specifics, without searching.
    #[arg(long)]
    parse_only: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = AgentConfig::from_env()?;

    let llm = ChatCompletionsClient::new(&config)?;
    let places = GooglePlacesClient::new(&config)?;
    let agent = Agent::new(&llm, &places, &config);

    if cli.parse_only {
        let specifics = agent.parse_user_search_request(&cli.request).await?;
        print_json(&specifics)
    } else {
        let recommendations = agent.get_top_recommendations(&cli.request).await?;
        print_json(&recommendations)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

//! civicmeet: find out when a municipality's public bodies meet and where
//! their agendas are published.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use discovery::{
    is_valid_state_code, render, Anthropic, Discovery, DiscoveryConfig, HttpFetcher, ModelCredentials,
    ModelLocator, Town, ValidatedFetcher,
};

#[derive(Parser)]
#[command(
    name = "civicmeet",
    about = "Find a municipality's meeting schedule and agenda links from its official website"
)]
struct Args {
    /// Town or city name
    town: String,

    /// Two-letter state code (e.g. VT, MA, NY)
    state: Option<String>,

    /// Model to use for lookup and synthesis
    #[arg(long, default_value = "claude-3-7-sonnet-20250219")]
    model: String,

    /// How many meeting-related links to follow from the landing page
    #[arg(long, default_value_t = 3)]
    max_follow_links: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,discovery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut town = Town::new(&args.town);
    if let Some(state) = &args.state {
        if !is_valid_state_code(state) {
            anyhow::bail!("state must be a valid 2-letter code (e.g. VT, MA, NY)");
        }
        town = town.with_state(state);
    }

    let api_key =
        std::env::var("ANTHROPIC_API_KEY").context("ANTHROPIC_API_KEY is not set")?;
    let model = Anthropic::new(ModelCredentials::new(api_key, args.model.clone()));

    let fetcher = ValidatedFetcher::new(HttpFetcher::with_timeout(Duration::from_secs(
        args.timeout_secs,
    )));
    let locator = ModelLocator::new(model.clone());

    let discovery = Discovery::new(locator, fetcher, model).with_config(
        DiscoveryConfig::new().with_max_follow_links(args.max_follow_links),
    );

    tracing::info!(town = %town, "Starting meeting discovery");
    let report = discovery
        .run(&town)
        .await
        .with_context(|| format!("meeting discovery failed for {}", town))?;

    let stdout = std::io::stdout();
    render(&report, &mut stdout.lock()).context("failed to write report")?;

    Ok(())
}

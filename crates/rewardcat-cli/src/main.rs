use clap::Parser;
use rewardcat_core::AppConfig;
use rewardcat_scraper::{crawl, finalize, render_json, CrawlPlan, RewardsClient};
use tracing_subscriber::EnvFilter;

/// Crawl the rewards catalog and print it as one sorted JSON array.
///
/// Settings come from the environment (or a `.env` file):
/// `REWARDCAT_BASE_URL`, `REWARDCAT_SLUGS`, `REWARDCAT_MAX_PAGE`,
/// `REWARDCAT_MAX_CONCURRENT_PAGES`, `REWARDCAT_REQUEST_TIMEOUT_SECS`,
/// `REWARDCAT_USER_AGENT`, `REWARDCAT_LOG_LEVEL`.
#[derive(Debug, Parser)]
#[command(name = "rewardcat", version)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    let config = rewardcat_core::load_app_config()?;
    init_tracing(&config)?;
    tracing::debug!(?config, "loaded configuration");

    let catalog = run(&config).await?;
    println!("{catalog}");
    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON document.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Crawls every configured page and renders the deduplicated, sorted catalog.
async fn run(config: &AppConfig) -> anyhow::Result<String> {
    let client = RewardsClient::new(
        &config.base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let plan = CrawlPlan::from_config(config);

    let summary = crawl(&plan, |req| client.fetch_page(req)).await;
    summary.log();

    let records = finalize(summary.records);
    Ok(render_json(&records)?)
}

#[cfg(test)]
mod tests;

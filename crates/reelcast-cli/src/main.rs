//! reelcast-cli
//!
//! Thin wiring binary around `reelcast-core`: environment-configured
//! credentials, the JSON-file store, and the real HTTP collaborators.
//! The `watch` loop stands in for an external cron trigger.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use reelcast_core::domain::Credentials;
use reelcast_core::impls::{GraphMediaClient, JsonFileStore, StockFootageClient, TracingSink};
use reelcast_core::ports::{SystemClock, UlidGenerator, VideoSource};
use reelcast_core::{
    CaptionTemplate, LifecycleRunner, PublishPipeline, RunReport, SchedulePolicy, Scheduler,
};

#[derive(Parser)]
#[command(name = "reelcast", about = "Schedule and publish stock videos at a daily cadence")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the stock-footage source and schedule a batch of posts.
    Automate {
        /// Search query for candidate videos.
        #[arg(long, default_value = "luxury lifestyle")]
        query: String,

        /// Maximum number of posts to schedule from the results.
        #[arg(long, default_value_t = 7)]
        count: usize,
    },

    /// Run one lifecycle scan: publish every due pending post.
    Run,

    /// Run lifecycle scans on an interval until interrupted.
    Watch {
        /// Seconds between scans.
        #[arg(long, default_value_t = 300)]
        interval_secs: u64,
    },
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

fn credentials() -> Result<Credentials> {
    Ok(Credentials::new(
        required_env("MEDIA_ACCESS_TOKEN")?,
        required_env("MEDIA_ACCOUNT_ID")?,
    ))
}

fn store() -> Arc<JsonFileStore> {
    let path =
        std::env::var("REELCAST_STORE").unwrap_or_else(|_| "scheduled-posts.json".to_string());
    Arc::new(JsonFileStore::new(path))
}

fn caption() -> CaptionTemplate {
    CaptionTemplate {
        headline: std::env::var("REELCAST_CAPTION_HEADLINE").unwrap_or_default(),
        tags: std::env::var("REELCAST_CAPTION_TAGS").unwrap_or_default(),
    }
}

fn lifecycle_runner() -> Result<LifecycleRunner> {
    let sink = Arc::new(TracingSink);
    let media = Arc::new(GraphMediaClient::new()?);
    let pipeline = PublishPipeline::new(media, sink.clone()).with_caption(caption());
    Ok(LifecycleRunner::new(
        store(),
        Arc::new(SystemClock),
        pipeline,
        sink,
    ))
}

fn print_report(report: &RunReport) {
    println!(
        "processed {} posts ({} posted, {} failed)",
        report.processed, report.posted, report.failed
    );
}

async fn automate(query: &str, count: usize) -> Result<()> {
    let credentials = credentials()?;
    let source = StockFootageClient::new(required_env("STOCK_API_KEY")?)?;

    let scheduler = Scheduler::new(
        store(),
        Arc::new(SystemClock),
        Arc::new(UlidGenerator::new(SystemClock)),
        Arc::new(TracingSink),
        SchedulePolicy::default(),
    );

    let candidates = source.search(query, 30).await?;
    let posts = scheduler.schedule(&candidates, count, &credentials).await?;

    println!("scheduled {} posts", posts.len());
    for post in &posts {
        println!("  {}  {}  {}", post.id, post.scheduled_for, post.video.url);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Automate { query, count } => automate(&query, count).await?,
        Command::Run => {
            let report = lifecycle_runner()?.run().await?;
            print_report(&report);
        }
        Command::Watch { interval_secs } => {
            let runner = lifecycle_runner()?;
            let mut ticks = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                ticks.tick().await;
                match runner.run().await {
                    Ok(report) => print_report(&report),
                    Err(err) => error!(error = %err, "lifecycle run failed"),
                }
            }
        }
    }
    Ok(())
}

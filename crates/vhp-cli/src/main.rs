//! Command-line entry point for the vacancy harvest pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vhp")]
#[command(about = "Job listing harvester: crawl searches, reconcile records, sweep stale ones")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Full run: crawl every search tag, then sweep unconfirmed records.
    Harvest,
    /// Discovery crawl only.
    Crawl,
    /// Staleness sweep only.
    Sweep,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let started = std::time::Instant::now();

    match cli.command.unwrap_or(Commands::Harvest) {
        Commands::Harvest => {
            let (crawl, sweep) = vhp_sync::run_harvest_from_env().await?;
            println!(
                "harvest complete: run_id={} pages={} drafts={} inserted={} refreshed={} swept={} archived={}",
                crawl.run_id,
                crawl.pages_fetched,
                crawl.drafts_parsed,
                crawl.inserted,
                crawl.refreshed,
                sweep.examined,
                sweep.archived,
            );
        }
        Commands::Crawl => {
            let crawl = vhp_sync::run_crawl_from_env().await?;
            println!(
                "crawl complete: run_id={} tags={} pages={} drafts={} inserted={} refreshed={}",
                crawl.run_id,
                crawl.tags,
                crawl.pages_fetched,
                crawl.drafts_parsed,
                crawl.inserted,
                crawl.refreshed,
            );
        }
        Commands::Sweep => {
            let sweep = vhp_sync::run_sweep_from_env().await?;
            println!(
                "sweep complete: examined={} confirmed={} archived={} unreachable={} batches={}",
                sweep.examined, sweep.confirmed, sweep.archived, sweep.unreachable, sweep.batches,
            );
        }
    }

    println!("execution time: {:?}", started.elapsed());
    Ok(())
}

use anyhow::Result;
use arbor::config::MiningOptions;
use arbor::pipeline::Miner;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arbor", about = "Association rule mining via FP-Growth")]
struct Cli {
    /// Input dataset in CSV format, one transaction per line.
    #[arg(long)]
    input: PathBuf,

    /// File path in which to store output rules.
    #[arg(long)]
    output: PathBuf,

    /// Minimum itemset support threshold, in range [0, 1].
    #[arg(long)]
    min_support: f64,

    /// Minimum rule confidence threshold, in range [0, 1].
    #[arg(long)]
    min_confidence: f64,

    /// Minimum rule lift threshold, in range [1, inf).
    #[arg(long, default_value_t = 1.0)]
    min_lift: f64,

    /// File path in which to store generated frequent itemsets.
    #[arg(long)]
    itemsets: Option<PathBuf>,

    /// Enable per-stage profiling output.
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.profile { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let options = MiningOptions {
        min_support: cli.min_support,
        min_confidence: cli.min_confidence,
        min_lift: cli.min_lift,
    };
    options.validate()?;

    info!("First pass, counting item frequencies...");
    let start = Instant::now();
    let mut miner = Miner::init(&cli.input)?;
    info!(elapsed = ?start.elapsed(), "First pass finished");

    info!("Generating frequent itemsets via FP-Growth...");
    let start = Instant::now();
    let itemsets = miner.mine_itemsets(options.min_support)?;
    info!(
        itemsets = itemsets.len(),
        elapsed = ?start.elapsed(),
        "FP-Growth finished"
    );

    if let Some(path) = &cli.itemsets {
        let start = Instant::now();
        miner.write_itemsets(path, &itemsets)?;
        info!(path = %path.display(), elapsed = ?start.elapsed(), "Wrote itemsets");
    }

    info!("Generating association rules...");
    let start = Instant::now();
    let rules = miner.generate_rules(&itemsets, &options);
    info!(rules = rules.len(), elapsed = ?start.elapsed(), "Rule generation finished");

    let start = Instant::now();
    miner.write_rules(&cli.output, &rules)?;
    info!(path = %cli.output.display(), elapsed = ?start.elapsed(), "Wrote rules");

    let stats = miner.stats();
    info!(
        transactions = stats.transactions(),
        empty_transactions = stats.empty_transactions(),
        itemsets = stats.itemsets(),
        rules = stats.rules(),
        "Mining complete"
    );
    Ok(())
}

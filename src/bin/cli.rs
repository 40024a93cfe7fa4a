//! fightstats CLI
//!
//! Local execution entry point: scrape the rankings and every ranked profile.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fightstats::{
    error::Result,
    models::{Category, CategoryFilter, Config, ExportFormat},
    pipeline, services,
    storage::LocalStorage,
    utils::http::HttpFetcher,
};

/// fightstats - UFC rankings and fighter stats scraper
#[derive(Parser, Debug)]
#[command(
    name = "fightstats",
    version,
    about = "Scrape UFC rankings and athlete profiles into a spreadsheet"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "fightstats.toml")]
    config: PathBuf,

    /// Scrape every ranked category (the default)
    #[arg(long, conflicts_with = "division")]
    all: bool,

    /// Scrape a single category by code (flw, bw, fw, lw, ww, mw, lhw, hw, wsw, wflw, wbw)
    #[arg(short, long, value_parser = parse_category)]
    division: Option<Category>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Export format: xlsx or json (overrides config)
    #[arg(long, value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Maximum concurrent profile fetches per batch (overrides config)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Validate configuration and exit
    #[arg(long)]
    check_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn filter(&self) -> CategoryFilter {
        if self.all {
            CategoryFilter::All
        } else {
            CategoryFilter::from_selection(self.division)
        }
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(concurrency) = self.concurrency {
            config.scraper.max_concurrent = concurrency;
        }
    }
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    services::selectable_category(s).map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse().map_err(|e: fightstats::error::AppError| e.to_string())
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = if cli.config.exists() {
        let config = Config::load_or_default(&cli.config);
        log::info!("Loaded configuration from {}", cli.config.display());
        config
    } else {
        log::info!(
            "No configuration at {}, using defaults",
            cli.config.display()
        );
        Config::default()
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    if cli.check_config {
        log::info!("✓ Config OK");
        log::info!("Rankings: {}", config.scraper.rankings_url);
        log::info!("Profiles: {}", config.scraper.athlete_base_url);
        log::info!(
            "Output: {} ({})",
            config.output.dir.display(),
            config.output.format.extension()
        );
        log::info!("Batch size: {}", config.scraper.max_concurrent);
        return Ok(());
    }

    let filter = cli.filter();
    match filter {
        CategoryFilter::All => log::info!("Scraping all ranked categories"),
        CategoryFilter::Only(category) => {
            log::info!("Scraping {} ({})", category, category.code())
        }
    }

    let fetcher = Arc::new(HttpFetcher::new(&config.scraper)?);
    let storage = LocalStorage::new(&config.output.dir, config.output.format);

    let summary = pipeline::run_scraper(&config, filter, fetcher, &storage).await?;

    if let Some(listing) = &summary.listing_path {
        log::info!("Roster listing: {}", listing.display());
    }
    log::info!("Done! Data saved to {}", summary.export_path.display());

    Ok(())
}

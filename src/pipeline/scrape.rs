// src/pipeline/scrape.rs

//! End-to-end scrape: rankings page, every ranked profile, one export.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{CategoryFilter, Config, Roster};
use crate::pipeline::ProfileScheduler;
use crate::services::{ProfileAssembler, RosterExtractor};
use crate::storage::ExportSink;
use crate::utils::http::PageFetcher;
use crate::utils::log;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub subjects: usize,
    pub batches: usize,
    pub failed_fetches: usize,
    pub export_path: PathBuf,
    pub listing_path: Option<PathBuf>,
    pub elapsed_secs: f64,
}

/// Run the scraper.
///
/// Only a missing rankings page (or an unrecognised category under an active
/// filter) aborts the run. Individual profile failures degrade to defaults.
pub async fn run_scraper(
    config: &Config,
    filter: CategoryFilter,
    fetcher: Arc<dyn PageFetcher>,
    storage: &dyn ExportSink,
) -> Result<RunSummary> {
    let start_time = Utc::now();
    log::header("UFC Fighter Stats Scraper");

    log::step(1, 3, "Rankings - Reading the ranked roster");
    let roster = fetch_roster(config, filter, fetcher.as_ref()).await?;
    let subjects = roster.subject_names();
    log::sub_item(&format!(
        "{} categories, {} ranked athletes",
        roster.categories.len(),
        roster.entry_count()
    ));

    let listing_path = if config.output.write_roster_listing {
        Some(storage.write_roster_listing(&roster).await?)
    } else {
        None
    };

    log::step(2, 3, "Profiles - Scraping athlete pages");
    let assembler = ProfileAssembler::new(fetcher, &config.scraper.athlete_base_url)?;
    let scheduler = ProfileScheduler::new(assembler, config.scraper.max_concurrent);
    let outcome = scheduler.run(&subjects).await;

    log::step(3, 3, "Export - Writing records");
    let export_path = storage.export(&outcome.records).await?;

    let elapsed_secs = (Utc::now() - start_time).num_milliseconds() as f64 / 1000.0;
    let summary = RunSummary {
        subjects: subjects.len(),
        batches: outcome.batches,
        failed_fetches: outcome.failed_fetches,
        export_path,
        listing_path,
        elapsed_secs,
    };

    log::summary(
        "Scrape complete",
        &[
            ("Athletes", summary.subjects.to_string()),
            ("Batches", summary.batches.to_string()),
            ("Failed fetches", summary.failed_fetches.to_string()),
            ("Export", summary.export_path.display().to_string()),
            ("Elapsed", format!("{:.2}s", summary.elapsed_secs)),
        ],
    );

    Ok(summary)
}

async fn fetch_roster(
    config: &Config,
    filter: CategoryFilter,
    fetcher: &dyn PageFetcher,
) -> Result<Roster> {
    let url = &config.scraper.rankings_url;
    let response = fetcher.fetch(url).await;
    if !response.is_success() {
        ::log::error!(
            "Could not retrieve rankings from {} (HTTP {})",
            url,
            response.status
        );
        return Err(AppError::RankingsUnavailable {
            status: response.status,
        });
    }

    parse_roster(&response.body, filter)
}

/// Parse a rankings page body into a roster.
pub fn parse_roster(body: &str, filter: CategoryFilter) -> Result<Roster> {
    let extractor = RosterExtractor::new()?;
    let doc = Html::parse_document(body);
    extractor.extract_roster(&doc, filter)
}

//! Pipeline entry points for scraper operations.
//!
//! - `run_scraper`: Rankings, then every ranked profile, then export
//! - `ProfileScheduler`: Batched concurrent profile assembly

pub mod scheduler;
pub mod scrape;

pub use scheduler::{ProfileScheduler, ScrapeOutcome, batch_ranges};
pub use scrape::{RunSummary, parse_roster, run_scraper};

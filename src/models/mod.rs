// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod config;
mod record;
mod roster;

// Re-export all public types
pub use category::{Category, CategoryFilter};
pub use config::{Config, ExportFormat, OutputConfig, ScraperConfig};
pub use record::{Extraction, FlatRecord};
pub use roster::{MAX_CONTENDERS, Roster, RosterCategory, RosterEntry, TITLEHOLDER_RANK};

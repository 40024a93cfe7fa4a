//! Export sinks for assembled athlete records.
//!
//! ## Output Layout
//!
//! ```text
//! {output_dir}/
//! ├── {stamp}-data.xlsx       # One row per athlete (or .json)
//! └── {stamp}-rankings.txt    # Human-readable roster listing
//! ```
//!
//! `stamp` is the local run time formatted as `DDMMYYYYHHMMSS`.

pub mod local;
pub mod xlsx;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FlatRecord, Roster};

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for export backends.
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Persist the ordered records as a tabular document. Returns where it landed.
    async fn export(&self, records: &[FlatRecord]) -> Result<PathBuf>;

    /// Persist the roster listing next to the data export.
    async fn write_roster_listing(&self, roster: &Roster) -> Result<PathBuf>;
}

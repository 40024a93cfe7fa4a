//! Service layer for the scraper.
//!
//! This module contains the extraction logic for:
//! - Profile sections (`ProfileExtractor`)
//! - Rankings roster (`RosterExtractor`)
//! - Per-athlete record assembly (`ProfileAssembler`)
//! - CSS selector tables (`selectors`)

mod assembler;
pub mod profile;
mod roster;
pub mod selectors;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assembler::{AssembledProfile, ProfileAssembler};
pub use profile::ProfileExtractor;
pub use roster::{EXCLUDED_CATEGORIES, RosterExtractor, is_excluded, selectable_category};

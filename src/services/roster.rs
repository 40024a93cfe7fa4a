// src/services/roster.rs

//! Rankings page roster extraction.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{
    Category, CategoryFilter, MAX_CONTENDERS, Roster, RosterCategory, RosterEntry,
    TITLEHOLDER_RANK,
};
use crate::services::selectors::RosterSelectors;
use crate::utils::normalize_whitespace;

/// Rankings groupings that never contribute athletes.
pub const EXCLUDED_CATEGORIES: [&str; 4] = [
    "Pound-for-Pound Top Rank",
    "Men's Pound-for-Pound Top Rank",
    "Women's Pound-for-Pound Top Rank",
    "Women's Featherweight",
];

/// Whether a category's rankings grouping is always skipped.
///
/// Matches the exact header or a header that extends the label, as with
/// `Pound-for-Pound` and `Pound-for-Pound Top Rank`.
pub fn is_excluded(category: Category) -> bool {
    let label = category.label();
    EXCLUDED_CATEGORIES
        .iter()
        .any(|excluded| *excluded == label || excluded.starts_with(&format!("{label} ")))
}

/// Parse a division code for a single-category run.
///
/// Codes for excluded categories are rejected: such a run could never
/// produce a ranked athlete.
pub fn selectable_category(code: &str) -> Result<Category> {
    let category: Category = code.parse()?;
    if is_excluded(category) {
        return Err(AppError::config(format!(
            "division '{}' ({}) is excluded from scraping and never yields athletes",
            category.code(),
            category
        )));
    }
    Ok(category)
}

/// Reads category groupings and their ranked athletes from the rankings page.
#[derive(Debug, Clone)]
pub struct RosterExtractor {
    sel: RosterSelectors,
}

impl RosterExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sel: RosterSelectors::new()?,
        })
    }

    /// Extract every included category in document order.
    ///
    /// With an active filter each header must resolve through the static
    /// category table; a header that does not is a configuration error.
    pub fn extract_roster(&self, doc: &Html, filter: CategoryFilter) -> Result<Roster> {
        let mut roster = Roster::default();

        for grouping in doc.select(&self.sel.grouping) {
            let Some(header) = grouping.select(&self.sel.grouping_header).next() else {
                log::warn!("Skipping rankings grouping without a header");
                continue;
            };
            let label = normalize_whitespace(&header.text().collect::<String>());

            if EXCLUDED_CATEGORIES.contains(&label.as_str()) {
                log::debug!("Skipping excluded category {}", label);
                continue;
            }

            if !filter.is_all() {
                let category = Category::from_label(&label).ok_or_else(|| {
                    log::error!("Category '{}' is missing from the category table", label);
                    AppError::unknown_category(&label)
                })?;
                if !filter.includes(category) {
                    continue;
                }
            }

            let category = self.read_grouping(grouping, label);
            log::debug!(
                "Category {}: {} athletes (titleholder: {})",
                category.name,
                category.entries.len(),
                category.titleholder().map_or("vacant", |e| e.name.as_str())
            );
            roster.categories.push(category);
        }

        Ok(roster)
    }

    fn read_grouping(&self, grouping: ElementRef, label: String) -> RosterCategory {
        let mut entries = Vec::with_capacity(MAX_CONTENDERS + 1);

        // A vacant title is normal.
        let titleholder = grouping
            .select(&self.sel.titleholder_block)
            .next()
            .and_then(|block| block.select(&self.sel.row_name).next())
            .map(row_text)
            .filter(|name| !name.is_empty());
        if let Some(name) = titleholder {
            entries.push(RosterEntry {
                name,
                rank: TITLEHOLDER_RANK,
            });
        }

        let contenders = grouping
            .select(&self.sel.contender_cell)
            .filter_map(|cell| cell.select(&self.sel.row_name).next())
            .map(row_text)
            .filter(|name| !name.is_empty())
            .take(MAX_CONTENDERS);
        for (position, name) in contenders.enumerate() {
            entries.push(RosterEntry {
                name,
                rank: (position + 1) as u8,
            });
        }

        RosterCategory {
            name: label,
            entries,
        }
    }
}

fn row_text(row: ElementRef) -> String {
    row.text().collect::<String>().trim().to_string()
}

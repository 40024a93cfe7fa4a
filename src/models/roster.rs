// src/models/roster.rs

//! Rankings roster structures.

/// Rank reserved for the category's titleholder.
pub const TITLEHOLDER_RANK: u8 = 0;

/// Maximum number of ranked contenders per category.
pub const MAX_CONTENDERS: usize = 15;

/// A ranked athlete within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Athlete name as printed on the rankings page
    pub name: String,

    /// 0 for the titleholder, 1..=15 for contenders
    pub rank: u8,
}

impl RosterEntry {
    pub fn is_titleholder(&self) -> bool {
        self.rank == TITLEHOLDER_RANK
    }
}

/// One category grouping from the rankings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCategory {
    /// Header label
    pub name: String,

    /// Titleholder first (if any), then contenders in rank order
    pub entries: Vec<RosterEntry>,
}

impl RosterCategory {
    pub fn titleholder(&self) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.is_titleholder())
    }
}

/// Every included category, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub categories: Vec<RosterCategory>,
}

impl Roster {
    /// Athlete names in category-then-rank order. Athletes ranked in more
    /// than one category appear once per category.
    pub fn subject_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.name.clone()))
            .collect()
    }

    /// Human-readable listing: category header, then tab-indented names.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for category in &self.categories {
            out.push_str(&category.name);
            out.push('\n');
            for entry in &category.entries {
                out.push('\t');
                out.push_str(&entry.name);
                out.push('\n');
            }
        }
        out
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

// src/models/category.rs

//! Weight categories and the inclusion filter.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A rankings category with a stable short code.
///
/// The table is closed: a header on the rankings page that does not appear
/// here means the table is out of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Flyweight,
    Bantamweight,
    Featherweight,
    Lightweight,
    Welterweight,
    Middleweight,
    LightHeavyweight,
    Heavyweight,
    WomensStrawweight,
    WomensFlyweight,
    WomensBantamweight,
    WomensFeatherweight,
    PoundForPound,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Flyweight,
        Category::Bantamweight,
        Category::Featherweight,
        Category::Lightweight,
        Category::Welterweight,
        Category::Middleweight,
        Category::LightHeavyweight,
        Category::Heavyweight,
        Category::WomensStrawweight,
        Category::WomensFlyweight,
        Category::WomensBantamweight,
        Category::WomensFeatherweight,
        Category::PoundForPound,
    ];

    /// Header label as printed on the rankings page.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Flyweight => "Flyweight",
            Category::Bantamweight => "Bantamweight",
            Category::Featherweight => "Featherweight",
            Category::Lightweight => "Lightweight",
            Category::Welterweight => "Welterweight",
            Category::Middleweight => "Middleweight",
            Category::LightHeavyweight => "Light Heavyweight",
            Category::Heavyweight => "Heavyweight",
            Category::WomensStrawweight => "Women's Strawweight",
            Category::WomensFlyweight => "Women's Flyweight",
            Category::WomensBantamweight => "Women's Bantamweight",
            Category::WomensFeatherweight => "Women's Featherweight",
            Category::PoundForPound => "Pound-for-Pound",
        }
    }

    /// Short code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Flyweight => "flw",
            Category::Bantamweight => "bw",
            Category::Featherweight => "fw",
            Category::Lightweight => "lw",
            Category::Welterweight => "ww",
            Category::Middleweight => "mw",
            Category::LightHeavyweight => "lhw",
            Category::Heavyweight => "hw",
            Category::WomensStrawweight => "wsw",
            Category::WomensFlyweight => "wflw",
            Category::WomensBantamweight => "wbw",
            Category::WomensFeatherweight => "wfw",
            Category::PoundForPound => "p4p",
        }
    }

    /// Resolve a rankings header label.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Resolve a short code, ignoring case.
    pub fn from_code(code: &str) -> Option<Category> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            let codes: Vec<_> = Self::ALL.iter().map(|c| c.code()).collect();
            AppError::config(format!(
                "unknown division code '{s}' (expected one of: {})",
                codes.join(", ")
            ))
        })
    }
}

/// Which rankings categories to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Build the filter from an optional CLI selection; no selection means all.
    pub fn from_selection(selected: Option<Category>) -> Self {
        selected.map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn includes(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

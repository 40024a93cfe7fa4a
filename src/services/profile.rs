// src/services/profile.rs

//! Athlete profile field extraction.
//!
//! Each `extract_*` method targets one section of a profile page and either
//! returns what it found or that section's fixed default. Sections are
//! independent: they can be called in any order, on any subset, and a
//! failure in one never affects another.

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{Extraction, FlatRecord};
use crate::services::selectors::ProfileSelectors;
use crate::utils::normalize_whitespace;

/// Value used when the ranking badge has no `#` marker.
pub const UNRANKED: &str = "Unranked";

/// Biography keys reported when the biography container is missing.
pub const BIOGRAPHY_DEFAULTS: [(&str, &str); 8] = [
    ("status", ""),
    ("hometown", ""),
    ("age", ""),
    ("height", ""),
    ("weight", ""),
    ("octagon_debut", ""),
    ("reach", ""),
    ("leg_reach", ""),
];

pub const STRIKING_DEFAULTS: [(&str, &str); 3] = [
    ("significant_strikes_landed", "0"),
    ("significant_strikes_attempted", "0"),
    ("significant_strike_accuracy", "0"),
];

pub const GRAPPLING_DEFAULTS: [(&str, &str); 3] = [
    ("takedowns_landed", "0"),
    ("takedowns_attempted", "0"),
    ("takedown_accuracy", "0"),
];

pub const FIGHT_METRICS_DEFAULTS: [(&str, &str); 17] = [
    ("significant_strikes_landed_per_min", "0"),
    ("significant_strikes_absorbed_per_min", "0"),
    ("takedown_average_per_15_min", "0"),
    ("submission_average_per_15_min", "0"),
    ("significant_strikes_defense", "0"),
    ("takedown_defense", "0"),
    ("knockdown_ratio", "0"),
    ("average_fight_time", "0:00"),
    ("significant_strikes_by_position_standing", "0"),
    ("significant_strikes_by_position_clinch", "0"),
    ("significant_strikes_by_position_ground", "0"),
    ("significant_strikes_by_target_head", "0"),
    ("significant_strikes_by_target_body", "0"),
    ("significant_strikes_by_target_leg", "0"),
    ("win_by_way_knockout", "0"),
    ("win_by_way_decision", "0"),
    ("win_by_way_submission", "0"),
];

/// Which of the two accuracy cards to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccuracyCard {
    Striking,
    Grappling,
}

impl AccuracyCard {
    /// Title the shared full-width card must carry to be accepted.
    fn title(&self) -> &'static str {
        match self {
            AccuracyCard::Striking => "striking accuracy",
            AccuracyCard::Grappling => "grappling accuracy",
        }
    }

    /// Keys for (landed, attempted, accuracy).
    fn defaults(&self) -> &'static [(&'static str, &'static str); 3] {
        match self {
            AccuracyCard::Striking => &STRIKING_DEFAULTS,
            AccuracyCard::Grappling => &GRAPPLING_DEFAULTS,
        }
    }
}

/// Extracts profile sections from a parsed athlete page.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    sel: ProfileSelectors,
}

impl ProfileExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sel: ProfileSelectors::new()?,
        })
    }

    /// Nickname with quote characters removed.
    pub fn extract_nickname(&self, doc: &Html) -> Extraction<String> {
        let element = first(doc, &self.sel.hero_nickname)
            .or_else(|| first(doc, &self.sel.legacy_nickname));

        match element {
            Some(el) => Extraction::Found(text_of(el).replace('"', "").trim().to_string()),
            None => {
                log::debug!("Athlete does not have a nickname");
                Extraction::Fallback(String::new())
            }
        }
    }

    /// Win-loss-draw record, e.g. `"27-1-0 (W-L-D)"`.
    pub fn extract_record(&self, doc: &Html) -> Extraction<String> {
        let element = first(doc, &self.sel.hero_division_body)
            .or_else(|| first(doc, &self.sel.legacy_headline_suffix));

        match element {
            Some(el) => {
                let text = text_of(el);
                let record = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .last()
                    .unwrap_or("");
                Extraction::Found(record.to_string())
            }
            None => {
                log::debug!("Athlete does not have a record");
                Extraction::Fallback(String::new())
            }
        }
    }

    /// Ranking badge.
    ///
    /// Current pages carry `hero-profile__tag` badges: a `#` marker yields
    /// the rank token (`"#12"`), anything else is reported as `"Unranked"`.
    /// Legacy pages carry the ranking in the headline suffix, ahead of a `•`.
    pub fn extract_ranking(&self, doc: &Html) -> Extraction<String> {
        if let Some(tag) = first(doc, &self.sel.hero_tag) {
            let text = text_of(tag);
            let text = text.trim();
            let ranking = if text.contains('#') {
                text.split(' ').next().unwrap_or("")
            } else {
                UNRANKED
            };
            return Extraction::Found(ranking.to_string());
        }

        match first(doc, &self.sel.legacy_headline_suffix) {
            Some(el) => {
                let joined = text_of(el)
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                let ranking = joined.split('•').next().unwrap_or("").trim();
                Extraction::Found(ranking.to_string())
            }
            None => {
                log::debug!("Athlete does not have a ranking");
                Extraction::Fallback(String::new())
            }
        }
    }

    /// Biography fields, keyed by their lowercased, underscored labels.
    ///
    /// The key set is whatever the page lists. Only a missing container
    /// or a malformed field falls back to the fixed eight keys.
    pub fn extract_biography(&self, doc: &Html) -> Extraction<FlatRecord> {
        match self.try_biography(doc) {
            Some(record) => Extraction::Found(record),
            None => {
                log::debug!("Athlete does not have a biography section");
                Extraction::Fallback(FlatRecord::from_pairs(&BIOGRAPHY_DEFAULTS))
            }
        }
    }

    fn try_biography(&self, doc: &Html) -> Option<FlatRecord> {
        let container = first(doc, &self.sel.bio_container)?;
        let mut record = FlatRecord::new();

        for child in container.children().filter_map(ElementRef::wrap) {
            for field in child.select(&self.sel.bio_field) {
                let label = field.select(&self.sel.bio_label).next()?;
                let value = field.select(&self.sel.bio_text).next()?;

                let key = text_of(label).trim().to_lowercase().replace(' ', "_");
                let value = text_of(value).replace('\n', "");
                record.insert(key, value.trim());
            }
        }

        Some(record)
    }

    /// Significant strikes landed/attempted and accuracy percentage.
    pub fn extract_striking_accuracy(&self, doc: &Html) -> Extraction<FlatRecord> {
        self.extract_accuracy(doc, AccuracyCard::Striking)
    }

    /// Takedowns landed/attempted and accuracy percentage.
    pub fn extract_grappling_accuracy(&self, doc: &Html) -> Extraction<FlatRecord> {
        self.extract_accuracy(doc, AccuracyCard::Grappling)
    }

    fn extract_accuracy(&self, doc: &Html, card: AccuracyCard) -> Extraction<FlatRecord> {
        let [landed_key, attempted_key, accuracy_key] = card.defaults().map(|(key, _)| key);

        match self.try_accuracy(doc, card) {
            Some((landed, attempted, accuracy)) => {
                let mut record = FlatRecord::new();
                record.insert(landed_key, landed);
                record.insert(attempted_key, attempted);
                record.insert(accuracy_key, accuracy);
                Extraction::Found(record)
            }
            None => {
                log::debug!("The {} detail card does not exist", card.title());
                Extraction::Fallback(FlatRecord::from_pairs(card.defaults()))
            }
        }
    }

    fn try_accuracy(&self, doc: &Html, card: AccuracyCard) -> Option<(String, String, String)> {
        let primary = match card {
            AccuracyCard::Striking => &self.sel.card_odd,
            AccuracyCard::Grappling => &self.sel.card_even,
        };

        let element = match first(doc, primary) {
            Some(el) => el,
            None => {
                // Only one detail card on the page; it may belong to either section.
                let el = first(doc, &self.sel.card_full_width)?;
                let title = el.select(&self.sel.card_title).next()?;
                if normalize_whitespace(&text_of(title)).to_lowercase() != card.title() {
                    return None;
                }
                el
            }
        };

        let accuracy = text_of(element.select(&self.sel.card_percent).next()?);
        let values: Vec<ElementRef> = element.select(&self.sel.card_stat_value).collect();
        let landed = text_of(*values.first()?);
        let attempted = text_of(*values.get(1)?);

        Some((or_zero(&landed), or_zero(&attempted), or_zero(&accuracy)))
    }

    /// Fight metrics: the two-column comparison rows plus the final
    /// three-column row. All-or-nothing: any structural miss yields the
    /// full 17-key default set.
    pub fn extract_fight_metrics(&self, doc: &Html) -> Extraction<FlatRecord> {
        match self.try_fight_metrics(doc) {
            Some(record) => Extraction::Found(record),
            None => {
                log::debug!("Athlete does not have fight metrics");
                Extraction::Fallback(FlatRecord::from_pairs(&FIGHT_METRICS_DEFAULTS))
            }
        }
    }

    fn try_fight_metrics(&self, doc: &Html) -> Option<FlatRecord> {
        let container = first(doc, &self.sel.metrics_container)?;
        let mut record = FlatRecord::new();

        for row in container.select(&self.sel.two_col_row) {
            for column in row.select(&self.sel.compare_column) {
                let left = column.select(&self.sel.compare_left).next()?;
                let right = column.select(&self.sel.compare_right).next()?;
                for section in [left, right] {
                    self.read_compare_section(section, &mut record)?;
                }
            }
        }

        let last_row = container.select(&self.sel.three_col_row).next()?;
        for column in last_row.children().filter_map(ElementRef::wrap) {
            match column.select(&self.sel.three_bar).next() {
                Some(bar) => self.read_three_bar(bar, &mut record)?,
                None => {
                    let body = column.select(&self.sel.body_chart).next()?;
                    self.read_body_chart(body, &mut record)?;
                }
            }
        }

        Some(record)
    }

    /// One side of a two-column comparison: label, optional suffix, number.
    fn read_compare_section(&self, section: ElementRef, record: &mut FlatRecord) -> Option<()> {
        let label = section.select(&self.sel.compare_label).next()?;
        let mut key = compare_label_key(&text_of(label));

        if let Some(suffix) = section.select(&self.sel.compare_label_suffix).next() {
            key.push('_');
            key.push_str(&snake_case(&text_of(suffix)));
        }

        let value = section
            .select(&self.sel.compare_number)
            .next()
            .map(|el| compact(&text_of(el)))
            .unwrap_or_else(|| "0".to_string());

        record.insert(key, value);
        Some(())
    }

    /// Three labelled bars, e.g. strikes by position or wins by method.
    fn read_three_bar(&self, bar: ElementRef, record: &mut FlatRecord) -> Option<()> {
        let title = bar.select(&self.sel.three_bar_title).next()?;
        let prefix = chart_title_key(&text_of(title));

        for group in bar.select(&self.sel.three_bar_group) {
            let label = group.select(&self.sel.three_bar_label).next()?;
            let suffix = bar_label_suffix(&text_of(label));

            let value = group
                .select(&self.sel.three_bar_value)
                .next()
                .and_then(|el| text_of(el).split_whitespace().next().map(str::to_string))
                .unwrap_or_else(|| "0".to_string());

            record.insert(format!("{prefix}_{suffix}"), value);
        }

        Some(())
    }

    /// Body silhouette chart: exactly head, body and leg values.
    fn read_body_chart(&self, body: ElementRef, record: &mut FlatRecord) -> Option<()> {
        let title = body.select(&self.sel.body_chart_title).next()?;
        let prefix = chart_title_key(&text_of(title));

        let targets = [
            ("head", &self.sel.body_head_value),
            ("body", &self.sel.body_body_value),
            ("leg", &self.sel.body_leg_value),
        ];
        for (target, selector) in targets {
            let value = body
                .select(selector)
                .next()
                .map(|el| compact(&text_of(el)))
                .unwrap_or_else(|| "0".to_string());
            record.insert(format!("{prefix}_{target}"), value);
        }

        Some(())
    }
}

fn first<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

fn or_zero(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() { "0".to_string() } else { s.to_string() }
}

/// Strip newlines and spaces from a stat value (`"64 %"` -> `"64%"`).
fn compact(s: &str) -> String {
    s.chars().filter(|c| *c != '\n' && *c != ' ').collect()
}

fn snake_case(s: &str) -> String {
    normalize_whitespace(s).to_lowercase().replace(' ', "_")
}

/// `"Sig. Str. Landed"` -> `"significant_strikes_landed"`,
/// `"Takedown avg"` -> `"takedown_average"`.
fn compare_label_key(label: &str) -> String {
    normalize_whitespace(label)
        .to_lowercase()
        .replace("sig. str.", "significant strikes")
        .replace("avg", "average")
        .replace(' ', "_")
}

/// `"Sig. Str. By Position"` -> `"significant_strikes_by_position"`.
fn chart_title_key(title: &str) -> String {
    normalize_whitespace(title)
        .to_lowercase()
        .replace("sig. str.", "significant strikes")
        .replace(' ', "_")
}

/// `"KO/TKO"` -> `"knockout"`, `"DEC"` -> `"decision"`, `"SUB"` -> `"submission"`.
fn bar_label_suffix(label: &str) -> String {
    label
        .replace("KO/TKO", "knockout")
        .replace("DEC", "decision")
        .replace("SUB", "submission")
        .to_lowercase()
        .trim()
        .to_string()
}

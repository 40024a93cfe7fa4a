//! CSS selector tables for profile and rankings pages.
//!
//! Every selector the extractors use is parsed once, up front, so a typo in
//! this table is reported as an `AppError::Selector` instead of silently
//! turning every section into its fallback.

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector into an `AppError` on failure.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Selectors for athlete profile pages (both markup revisions).
#[derive(Debug, Clone)]
pub struct ProfileSelectors {
    // Hero header, current revision
    pub hero_nickname: Selector,
    pub hero_division_body: Selector,
    pub hero_tag: Selector,

    // Hero header, legacy revision
    pub legacy_nickname: Selector,
    pub legacy_headline_suffix: Selector,

    // Biography
    pub bio_container: Selector,
    pub bio_field: Selector,
    pub bio_label: Selector,
    pub bio_text: Selector,

    // Accuracy cards
    pub card_odd: Selector,
    pub card_even: Selector,
    pub card_full_width: Selector,
    pub card_title: Selector,
    pub card_percent: Selector,
    pub card_stat_value: Selector,

    // Fight metrics
    pub metrics_container: Selector,
    pub two_col_row: Selector,
    pub compare_column: Selector,
    pub compare_left: Selector,
    pub compare_right: Selector,
    pub compare_label: Selector,
    pub compare_label_suffix: Selector,
    pub compare_number: Selector,
    pub three_col_row: Selector,
    pub three_bar: Selector,
    pub three_bar_title: Selector,
    pub three_bar_group: Selector,
    pub three_bar_label: Selector,
    pub three_bar_value: Selector,
    pub body_chart: Selector,
    pub body_chart_title: Selector,
    pub body_head_value: Selector,
    pub body_body_value: Selector,
    pub body_leg_value: Selector,
}

impl ProfileSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hero_nickname: parse_selector(".hero-profile__nickname")?,
            hero_division_body: parse_selector(".hero-profile__division-body")?,
            hero_tag: parse_selector(".hero-profile__tag")?,

            legacy_nickname: parse_selector(".field.field-name-nickname")?,
            legacy_headline_suffix: parse_selector(".c-hero__headline-suffix.tz-change-inner")?,

            bio_container: parse_selector(".c-bio__info-details")?,
            bio_field: parse_selector(".c-bio__field")?,
            bio_label: parse_selector(".c-bio__label")?,
            bio_text: parse_selector(".c-bio__text")?,

            card_odd: parse_selector(".l-overlap-group__item--odd")?,
            card_even: parse_selector(".l-overlap-group__item--even")?,
            card_full_width: parse_selector(".l-overlap-group__item--odd--full-width")?,
            card_title: parse_selector(".c-overlap--stats__title")?,
            card_percent: parse_selector(".e-chart-circle__percent")?,
            card_stat_value: parse_selector(".c-overlap__stats-value")?,

            metrics_container: parse_selector(
                ".l-container__content--narrow.stats-records__outer-container",
            )?,
            two_col_row: parse_selector(".c-stats-group-2col")?,
            compare_column: parse_selector(".c-stat-compare")?,
            compare_left: parse_selector(".c-stat-compare__group-1")?,
            compare_right: parse_selector(".c-stat-compare__group-2")?,
            compare_label: parse_selector(".c-stat-compare__label")?,
            compare_label_suffix: parse_selector(".c-stat-compare__label-suffix")?,
            compare_number: parse_selector(".c-stat-compare__number")?,
            three_col_row: parse_selector(".c-stats-group-3col")?,
            three_bar: parse_selector(".c-stat-3bar")?,
            three_bar_title: parse_selector(".c-stat-3bar__title")?,
            three_bar_group: parse_selector(".c-stat-3bar__group")?,
            three_bar_label: parse_selector(".c-stat-3bar__label")?,
            three_bar_value: parse_selector(".c-stat-3bar__value")?,
            body_chart: parse_selector(".c-stat-body")?,
            body_chart_title: parse_selector(".e-t5")?,
            body_head_value: parse_selector("#e-stat-body_x5F__x5F_head_value")?,
            body_body_value: parse_selector("#e-stat-body_x5F__x5F_body_value")?,
            body_leg_value: parse_selector("#e-stat-body_x5F__x5F_leg_value")?,
        })
    }
}

/// Selectors for the rankings page.
#[derive(Debug, Clone)]
pub struct RosterSelectors {
    pub grouping: Selector,
    pub grouping_header: Selector,
    pub titleholder_block: Selector,
    pub row_name: Selector,
    pub contender_cell: Selector,
}

impl RosterSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            grouping: parse_selector(".view-grouping")?,
            grouping_header: parse_selector(".view-grouping-header")?,
            titleholder_block: parse_selector(".info")?,
            row_name: parse_selector(".views-row")?,
            contender_cell: parse_selector(".views-field.views-field-title")?,
        })
    }
}

// src/services/assembler.rs

//! Profile assembly: fetch one athlete page and flatten every section.

use std::sync::Arc;

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::FlatRecord;
use crate::services::ProfileExtractor;
use crate::utils::http::PageFetcher;
use crate::utils::{athlete_slug, resolve_url};

/// An assembled record plus whether its page was fetched successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProfile {
    pub record: FlatRecord,
    pub fetched: bool,
}

/// Fetches athlete profiles and composes their sections into one record.
pub struct ProfileAssembler {
    extractor: ProfileExtractor,
    fetcher: Arc<dyn PageFetcher>,
    base_url: Url,
}

impl ProfileAssembler {
    pub fn new(fetcher: Arc<dyn PageFetcher>, athlete_base_url: &str) -> Result<Self> {
        Ok(Self {
            extractor: ProfileExtractor::new()?,
            fetcher,
            base_url: Url::parse(athlete_base_url)?,
        })
    }

    /// Profile URL for an athlete: base URL plus the hyphenated, lowercased name.
    pub fn profile_url(&self, name: &str) -> String {
        resolve_url(&self.base_url, &athlete_slug(name))
    }

    /// Fetch and assemble one athlete.
    ///
    /// A failed fetch still runs every extractor against whatever body came
    /// back, so a missing athlete yields a record of defaults.
    pub async fn assemble(&self, name: &str) -> AssembledProfile {
        let name = name.trim();
        let url = self.profile_url(name);
        log::debug!("Scraping fighter stats for {} from {}", name, url);

        let response = self.fetcher.fetch(&url).await;
        let fetched = response.is_success();
        if !fetched {
            log::warn!("{} not found! (HTTP {} from {})", name, response.status, url);
        }

        AssembledProfile {
            record: self.assemble_document(name, &response.body),
            fetched,
        }
    }

    /// Compose a record from an already-fetched profile page.
    pub fn assemble_document(&self, name: &str, body: &str) -> FlatRecord {
        let doc = Html::parse_document(body);
        let ex = &self.extractor;

        let mut record = FlatRecord::new();
        record.insert("name", name);
        record.insert("nickname", ex.extract_nickname(&doc).into_inner());
        record.insert("record", ex.extract_record(&doc).into_inner());
        record.insert("ranking", ex.extract_ranking(&doc).into_inner());
        record.extend(ex.extract_biography(&doc).into_inner());
        record.extend(ex.extract_striking_accuracy(&doc).into_inner());
        record.extend(ex.extract_grappling_accuracy(&doc).into_inner());
        record.extend(ex.extract_fight_metrics(&doc).into_inner());
        record
    }
}

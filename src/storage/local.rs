//! Local filesystem export sink.
//!
//! Every file of a run shares one timestamp prefix, and every write goes to a
//! temporary sibling first and is renamed into place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{ExportFormat, FlatRecord, Roster};
use crate::storage::{ExportSink, xlsx};

/// Timestamp format for output file names.
pub const STAMP_FORMAT: &str = "%d%m%Y%H%M%S";

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    format: ExportFormat,
    stamp: String,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory, stamped with the current local time.
    pub fn new(root_dir: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self::with_stamp(root_dir, format, Local::now().format(STAMP_FORMAT).to_string())
    }

    pub fn with_stamp(
        root_dir: impl Into<PathBuf>,
        format: ExportFormat,
        stamp: impl Into<String>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            format,
            stamp: stamp.into(),
        }
    }

    /// File name of the data export for this run.
    pub fn data_file_name(&self) -> String {
        format!("{}-data.{}", self.stamp, self.format.extension())
    }

    /// File name of the roster listing for this run.
    pub fn listing_file_name(&self) -> String {
        format!("{}-rankings.txt", self.stamp)
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }

    fn encode(&self, records: &[FlatRecord]) -> Result<Vec<u8>> {
        match self.format {
            ExportFormat::Xlsx => xlsx::render_workbook(records),
            ExportFormat::Json => Ok(serde_json::to_vec_pretty(records)?),
        }
    }
}

#[async_trait]
impl ExportSink for LocalStorage {
    async fn export(&self, records: &[FlatRecord]) -> Result<PathBuf> {
        let bytes = self.encode(records)?;
        let path = self.write_bytes(&self.data_file_name(), &bytes).await?;
        log::info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }

    async fn write_roster_listing(&self, roster: &Roster) -> Result<PathBuf> {
        let path = self
            .write_bytes(&self.listing_file_name(), roster.listing().as_bytes())
            .await?;
        log::info!("Wrote roster listing to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RosterCategory, RosterEntry};
    use tempfile::TempDir;

    fn storage(tmp: &TempDir, format: ExportFormat) -> LocalStorage {
        LocalStorage::with_stamp(tmp.path().join("fighter_stats"), format, "19102026120000")
    }

    #[test]
    fn test_file_names() {
        let s = LocalStorage::with_stamp("out", ExportFormat::Xlsx, "01022026030405");
        assert_eq!(s.data_file_name(), "01022026030405-data.xlsx");
        assert_eq!(s.listing_file_name(), "01022026030405-rankings.txt");
    }

    #[test]
    fn test_new_uses_fourteen_digit_stamp() {
        let s = LocalStorage::new("out", ExportFormat::Json);
        let name = s.data_file_name();
        let stamp = name.strip_suffix("-data.json").unwrap();
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_json_export_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp, ExportFormat::Json);

        let records = vec![
            FlatRecord::from_pairs(&[("name", "B"), ("nickname", "")]),
            FlatRecord::from_pairs(&[("name", "A"), ("nickname", "Ace")]),
        ];
        let path = storage.export(&records).await.unwrap();
        assert_eq!(
            path,
            tmp.path().join("fighter_stats/19102026120000-data.json")
        );

        let loaded: serde_json::Value =
            serde_json::from_slice(&tokio::fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(loaded[0]["name"], "B");
        assert_eq!(loaded[1]["nickname"], "Ace");
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_xlsx_export() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp, ExportFormat::Xlsx);

        let records = vec![FlatRecord::from_pairs(&[("name", "Jon Jones")])];
        let path = storage.export(&records).await.unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
    }

    #[tokio::test]
    async fn test_write_roster_listing() {
        let tmp = TempDir::new().unwrap();
        let storage = storage(&tmp, ExportFormat::Xlsx);

        let roster = Roster {
            categories: vec![RosterCategory {
                name: "Flyweight".into(),
                entries: vec![
                    RosterEntry {
                        name: "Champ".into(),
                        rank: 0,
                    },
                    RosterEntry {
                        name: "First".into(),
                        rank: 1,
                    },
                ],
            }],
        };

        let path = storage.write_roster_listing(&roster).await.unwrap();
        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, roster.listing());
        assert!(path.ends_with("19102026120000-rankings.txt"));
    }
}

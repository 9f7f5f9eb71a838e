// src/storage/json.rs

//! JSON-file backed posted-record store.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::{PostedEntry, PostedRecord};

/// Posted-record store persisted as a single JSON file.
///
/// `add` only mutates memory; the orchestrator calls [`PostedStore::save`]
/// after a confirmed delivery, so a dry run or a failed post leaves the file
/// exactly as it was.
#[derive(Debug)]
pub struct PostedStore {
    path: PathBuf,
    record: PostedRecord,
}

impl PostedStore {
    /// Open the store, loading the ledger from `path`.
    ///
    /// A missing or empty file is the first-run condition and yields an empty
    /// ledger. A file that exists but cannot be parsed is refused with
    /// [`AppError::CorruptRecord`].
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let record = Self::load(&path).await?;
        Ok(Self { path, record })
    }

    async fn load(path: &Path) -> Result<PostedRecord> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PostedRecord::default());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        if bytes.is_empty() {
            return Ok(PostedRecord::default());
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::corrupt_record(path.display().to_string(), e))
    }

    /// Whether a paper id has already been announced. Absence is `false`.
    pub fn is_posted(&self, paper_id: &str) -> bool {
        self.record.posted.contains_key(paper_id)
    }

    /// Record an announcement in memory with today's UTC date.
    pub fn add(&mut self, paper_id: &str, venue: &str) {
        self.record.posted.insert(
            paper_id.to_string(),
            PostedEntry {
                date: Utc::now().format("%Y-%m-%d").to_string(),
                venue: venue.to_string(),
            },
        );
    }

    /// Number of recorded announcements.
    pub fn len(&self) -> usize {
        self.record.posted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.posted.is_empty()
    }

    /// Persist the ledger, creating missing parent directories.
    ///
    /// Writes to a temp file and renames over the target so a crash mid-write
    /// leaves the previous ledger intact.
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.record)?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_file() {
        let tmp = TempDir::new().unwrap();
        let store = PostedStore::open(tmp.path().join("posted.json"))
            .await
            .unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_open_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posted.json");
        tokio::fs::write(&path, b"").await.unwrap();

        let store = PostedStore::open(&path).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_open_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posted.json");
        let content = r#"{"posted":{"paper1":{"date":"2023-01-01","venue":"ICLR 2023"}}}"#;
        tokio::fs::write(&path, content).await.unwrap();

        let store = PostedStore::open(&path).await.unwrap();
        assert!(store.is_posted("paper1"));
        assert!(!store.is_posted("paper2"));
    }

    #[tokio::test]
    async fn test_open_bare_object() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posted.json");
        tokio::fs::write(&path, b"{}").await.unwrap();

        let store = PostedStore::open(&path).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_open_corrupt_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posted.json");
        tokio::fs::write(&path, r#"{"posted": ["#).await.unwrap();

        let err = PostedStore::open(&path).await.unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord { .. }));
    }

    #[tokio::test]
    async fn test_add_and_is_posted() {
        let tmp = TempDir::new().unwrap();
        let mut store = PostedStore::open(tmp.path().join("posted.json"))
            .await
            .unwrap();

        store.add("paper1", "TestConf");

        assert!(store.is_posted("paper1"));
        assert!(!store.is_posted("paper2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("posted.json");

        let mut store = PostedStore::open(&path).await.unwrap();
        store.add("paper1", "ConfA");
        store.add("paper2", "ConfB");
        store.save().await.unwrap();

        let reloaded = PostedStore::open(&path).await.unwrap();
        assert!(reloaded.is_posted("paper1"));
        assert!(reloaded.is_posted("paper2"));
        assert!(!reloaded.is_posted("paper3"));
        assert_eq!(reloaded.record.posted["paper1"].venue, "ConfA");
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/posted.json");

        let mut store = PostedStore::open(&path).await.unwrap();
        store.add("paper1", "ConfA");
        store.save().await.unwrap();

        assert!(path.exists());
        let reloaded = PostedStore::open(&path).await.unwrap();
        assert!(reloaded.is_posted("paper1"));
    }

    #[tokio::test]
    async fn test_entry_date_is_calendar_date() {
        let tmp = TempDir::new().unwrap();
        let mut store = PostedStore::open(tmp.path().join("posted.json"))
            .await
            .unwrap();

        store.add("paper1", "ConfA");

        let entry = &store.record.posted["paper1"];
        assert_eq!(entry.date.len(), 10);
        assert_eq!(entry.date, Utc::now().format("%Y-%m-%d").to_string());
    }
}

//! Client-local persistence: a small string key/value store, the server-side
//! stand-in for browser localStorage.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{PresentationConfig, ResumeDocument};
use crate::resume::commands::ResumeState;

/// Storage key holding the serialized document plus presentation config.
pub const RESUME_DATA_KEY: &str = "resumeData";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored resume is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileStore
// ────────────────────────────────────────────────────────────────────────────

/// One `<key>.json` file per key. Writes go through a temp file in the same
/// directory and are renamed into place, so readers never see a torn value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn write_atomic(dir: &Path, path: &Path, value: &str) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(value.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let dir = self.dir.clone();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &value)).await??;
        debug!(key, "Wrote storage key");
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ────────────────────────────────────────────────────────────────────────────

/// In-process store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: tokio::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume (de)serialization
// ────────────────────────────────────────────────────────────────────────────

/// On-disk shape of the `resumeData` key.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedResume {
    #[serde(default)]
    document: ResumeDocument,
    #[serde(default)]
    presentation: PresentationConfig,
    saved_at: Option<DateTime<Utc>>,
}

/// Serializes the state under `RESUME_DATA_KEY`. Returns the save timestamp.
pub async fn save_resume(
    store: &dyn KeyValueStore,
    state: &ResumeState,
) -> Result<DateTime<Utc>, StorageError> {
    let saved_at = Utc::now();
    let payload = serde_json::to_string(&SavedResume {
        document: state.document.clone(),
        presentation: state.presentation.clone(),
        saved_at: Some(saved_at),
    })?;
    store.set(RESUME_DATA_KEY, &payload).await?;
    info!(bytes = payload.len(), "Saved resume");
    Ok(saved_at)
}

/// A restored snapshot and when it was saved.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResume {
    pub state: ResumeState,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Loads the saved snapshot, or `None` when nothing has been saved yet.
pub async fn load_resume(store: &dyn KeyValueStore) -> Result<Option<LoadedResume>, StorageError> {
    let Some(raw) = store.get(RESUME_DATA_KEY).await? else {
        return Ok(None);
    };
    let saved: SavedResume = serde_json::from_str(&raw)?;
    Ok(Some(LoadedResume {
        state: ResumeState {
            document: saved.document,
            presentation: saved.presentation,
        },
        saved_at: saved.saved_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionId, TemplateId};
    use crate::resume::defaults::placeholder_state;

    fn edited_state() -> ResumeState {
        let mut state = placeholder_state();
        state.document.personal_info.photo = Some("data:image/png;base64,AAAA".to_string());
        state.document.experience[0].is_present = false;
        state.document.experience[0].end_date = "2024".to_string();
        state.presentation.template_id = TemplateId::Swiss;
        state.presentation.accent_color = Some("#123456".to_string());
        state.presentation.visible_sections.set(SectionId::Hobbies, false);
        state.presentation.section_order.move_to(SectionId::Skills, 0);
        state
    }

    #[tokio::test]
    async fn test_memory_round_trip_is_identical() {
        let store = MemoryStore::default();
        let state = edited_state();
        let saved_at = save_resume(&store, &state).await.unwrap();
        let loaded = load_resume(&store).await.unwrap().unwrap();
        assert_eq!(loaded.state, state);
        assert_eq!(loaded.saved_at, Some(saved_at));
    }

    #[tokio::test]
    async fn test_file_round_trip_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        let state = edited_state();
        save_resume(&store, &state).await.unwrap();
        assert!(dir.path().join("nested").join("resumeData.json").exists());

        let loaded = load_resume(&store).await.unwrap().unwrap();
        assert_eq!(loaded.state, state);
    }

    #[tokio::test]
    async fn test_load_without_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(load_resume(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_error() {
        let store = MemoryStore::default();
        store.set(RESUME_DATA_KEY, "{not json").await.unwrap();
        assert!(matches!(
            load_resume(&store).await,
            Err(StorageError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_partial_payload_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store
            .set(
                RESUME_DATA_KEY,
                r#"{"document": {"summary": "Hi"}, "savedAt": null}"#,
            )
            .await
            .unwrap();
        let loaded = load_resume(&store).await.unwrap().unwrap();
        assert_eq!(loaded.state.document.summary, "Hi");
        assert_eq!(loaded.state.presentation, PresentationConfig::default());
        assert_eq!(loaded.saved_at, None);
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x").await,
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_file_store_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("k", "one").await.unwrap();
        store.set("k", "two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(store.get("other").await.unwrap(), None);
    }
}

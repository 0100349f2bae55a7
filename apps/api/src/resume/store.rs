use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::resume::commands::{Command, CommandError, ResumeState};
use crate::resume::defaults::placeholder_state;
use crate::resume::ids::IdGenerator;
use crate::resume::persistence::{load_resume, save_resume, KeyValueStore, StorageError};

/// Single owner of the editable resume. All mutation goes through `dispatch`.
#[derive(Debug)]
pub struct ResumeStore {
    state: ResumeState,
    ids: IdGenerator,
    dirty: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new(placeholder_state())
    }
}

impl ResumeStore {
    pub fn new(state: ResumeState) -> Self {
        Self {
            state,
            ids: IdGenerator::default(),
            dirty: false,
            last_saved: None,
        }
    }

    /// Restores the saved resume, falling back to placeholders when nothing is
    /// stored or the stored payload cannot be read. Never fails startup.
    pub async fn restore_or_default(kv: &dyn KeyValueStore) -> Self {
        match load_resume(kv).await {
            Ok(Some(loaded)) => {
                info!(saved_at = ?loaded.saved_at, "Restored saved resume");
                let mut store = Self::new(loaded.state);
                store.last_saved = loaded.saved_at;
                store
            }
            Ok(None) => {
                info!("No saved resume found, starting from placeholders");
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring unreadable saved resume: {e}");
                Self::default()
            }
        }
    }

    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), CommandError> {
        self.state
            .apply(command, &mut self.ids, placeholder_state)?;
        self.dirty = true;
        Ok(())
    }

    /// Replaces the whole state, as an import does.
    pub fn replace(&mut self, state: ResumeState) {
        self.state = state;
        self.dirty = true;
    }

    pub async fn save(&mut self, kv: &dyn KeyValueStore) -> Result<DateTime<Utc>, StorageError> {
        let saved_at = save_resume(kv, &self.state).await?;
        self.dirty = false;
        self.last_saved = Some(saved_at);
        Ok(saved_at)
    }

    /// Reloads from storage. Returns false (state unchanged) when nothing is saved.
    pub async fn reload(&mut self, kv: &dyn KeyValueStore) -> Result<bool, StorageError> {
        match load_resume(kv).await? {
            Some(loaded) => {
                self.state = loaded.state;
                self.last_saved = loaded.saved_at;
                self.dirty = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

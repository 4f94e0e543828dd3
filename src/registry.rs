//! Preset registry.
//!
//! Owns the ordered preset list and keeps it identical to the copy in the
//! key-value store. Every mutation builds the next list, persists it, and only
//! then replaces the in-memory list, so a failed write leaves memory exactly
//! as it was before the call.

use crate::error::{ApiError, StorageError};
use crate::host::{Notification, NotificationSink, TerminalSink};
use crate::preset::{default_presets, Preset, PresetFields, PresetIdGenerator};
use crate::storage::{KeyValueStore, PRESETS_KEY};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The command text was written to the terminal.
    Launched { preset_id: String, text: String },
    /// No preset with that id; an error notification was shown.
    NotFound { preset_id: String },
}

/// Registry shared between several callers. The lock is held across the whole
/// read-modify-persist sequence of each mutation.
pub type SharedRegistry = Arc<Mutex<PresetRegistry>>;

/// In-memory preset list mirrored write-through to a key-value store.
pub struct PresetRegistry {
    presets: Vec<Preset>,
    store: Arc<dyn KeyValueStore>,
    key: String,
    ids: PresetIdGenerator,
    ready: bool,
}

impl PresetRegistry {
    /// Registry over `store` using the default key. Call [`initialize`](Self::initialize) before use.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, PRESETS_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            presets: Vec::new(),
            store,
            key: key.into(),
            ids: PresetIdGenerator::new(),
            ready: false,
        }
    }

    /// Wrap in a lock for hosts with more than one caller.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }

    /// Load the list from storage, seeding the built-in set on first run.
    ///
    /// A stored non-empty list is adopted verbatim; removed built-ins are never
    /// merged back. On failure the registry stays uninitialized.
    pub fn initialize(&mut self) -> Result<(), ApiError> {
        match self.load()? {
            Some(stored) if !stored.is_empty() => {
                info!(count = stored.len(), "Loaded presets from storage");
                self.presets = stored;
            }
            _ => {
                let defaults = default_presets();
                self.persist(&defaults)?;
                info!(count = defaults.len(), "Seeded built-in presets");
                self.presets = defaults;
            }
        }
        self.ready = true;
        Ok(())
    }

    /// Adopt the built-in set without touching storage.
    ///
    /// Recovery path for a caller whose `initialize` failed: the list is usable
    /// but not persisted until the next successful mutation.
    pub fn initialize_in_memory(&mut self) {
        warn!("Using built-in presets without persisting them");
        self.presets = default_presets();
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Presets in display order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Append a user preset with a fresh id and `agent = "custom"`.
    pub fn add(&mut self, fields: PresetFields) -> Result<(), ApiError> {
        self.ensure_ready()?;
        let id = self.ids.next_id(&self.presets);
        let preset = Preset::from_fields(id.clone(), fields);

        let mut next = self.presets.clone();
        next.push(preset);
        self.commit(next)?;
        debug!(id = %id, "Added preset");
        Ok(())
    }

    /// Replace the preset with `id` in place.
    ///
    /// The replacement goes through the same normalization as [`add`](Self::add),
    /// so it is always stamped `agent = "custom"`, including when a built-in
    /// preset is edited. Returns `Ok(false)` without writing when `id` is
    /// unknown.
    pub fn edit(&mut self, id: &str, fields: PresetFields) -> Result<bool, ApiError> {
        self.ensure_ready()?;
        let Some(index) = self.presets.iter().position(|p| p.id == id) else {
            debug!(id, "Edit ignored: no such preset");
            return Ok(false);
        };

        let mut next = self.presets.clone();
        next[index] = Preset::from_fields(id.to_string(), fields);
        self.commit(next)?;
        debug!(id, "Edited preset");
        Ok(true)
    }

    /// Remove the preset with `id`. Returns `Ok(false)` without writing when
    /// `id` is unknown. Confirmation is the caller's job.
    pub fn delete(&mut self, id: &str) -> Result<bool, ApiError> {
        self.ensure_ready()?;
        let Some(index) = self.presets.iter().position(|p| p.id == id) else {
            debug!(id, "Delete ignored: no such preset");
            return Ok(false);
        };

        let mut next = self.presets.clone();
        next.remove(index);
        self.commit(next)?;
        debug!(id, "Deleted preset");
        Ok(true)
    }

    /// Send the preset's command, plus a newline, to the terminal.
    ///
    /// An unknown id is reported through `notifications` and returned as
    /// [`LaunchOutcome::NotFound`]; nothing is written in that case.
    pub fn launch(
        &self,
        id: &str,
        terminal: &dyn TerminalSink,
        notifications: &dyn NotificationSink,
    ) -> Result<LaunchOutcome, ApiError> {
        self.ensure_ready()?;
        let Some(preset) = self.get(id) else {
            warn!(id, "Launch requested for unknown preset");
            notifications.show(Notification::error("Preset not found"));
            return Ok(LaunchOutcome::NotFound {
                preset_id: id.to_string(),
            });
        };

        let text = format!("{}\n", preset.command);
        if let Err(e) = terminal.write(&text) {
            notifications.show(Notification::error(format!(
                "Failed to launch {}: {}",
                preset.name, e
            )));
            return Err(e);
        }
        info!(id, name = %preset.name, "Launched preset");
        notifications.show(Notification::info(format!("Launched: {}", preset.name)));
        Ok(LaunchOutcome::Launched {
            preset_id: preset.id.clone(),
            text,
        })
    }

    fn ensure_ready(&self) -> Result<(), ApiError> {
        if self.ready {
            Ok(())
        } else {
            Err(ApiError::Uninitialized)
        }
    }

    fn commit(&mut self, next: Vec<Preset>) -> Result<(), ApiError> {
        self.persist(&next)?;
        self.presets = next;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Preset>>, ApiError> {
        let Some(bytes) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let presets = serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(presets))
    }

    fn persist(&self, presets: &[Preset]) -> Result<(), ApiError> {
        let bytes =
            serde_json::to_vec(presets).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(&self.key, &bytes).map_err(|e| {
            warn!(error = %e, "Failed to persist presets");
            ApiError::from(e)
        })
    }
}

//! Id synthesis for user presets.
//!
//! Ids have the form `custom-<unix-millis>`. The generator never hands out the
//! same millisecond twice and steps past any id already in the list, so two
//! adds inside one millisecond (or a clock that steps backwards) still yield
//! distinct ids.

use super::model::Preset;
use chrono::Utc;

const CUSTOM_PREFIX: &str = "custom-";

/// Monotonic time-based id source.
#[derive(Debug, Default)]
pub struct PresetIdGenerator {
    last_issued: i64,
}

impl PresetIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id not present in `existing`.
    pub fn next_id(&mut self, existing: &[Preset]) -> String {
        self.next_id_at(Utc::now().timestamp_millis(), existing)
    }

    pub(crate) fn next_id_at(&mut self, now_millis: i64, existing: &[Preset]) -> String {
        let mut candidate = now_millis.max(self.last_issued + 1);
        loop {
            let id = format!("{}{}", CUSTOM_PREFIX, candidate);
            if !existing.iter().any(|p| p.id == id) {
                self.last_issued = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

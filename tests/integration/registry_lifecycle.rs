use agent_launcher::preset::{default_presets, PresetFields};
use agent_launcher::registry::{LaunchOutcome, PresetRegistry};
use agent_launcher::storage::{KeyValueStore, SledStore, PRESETS_KEY};
use agent_launcher::{ApiError, Preset};
use std::sync::Arc;
use tempfile::TempDir;

use crate::support::{FlakyStore, RecordingHost};

fn open(dir: &TempDir) -> PresetRegistry {
    let store = SledStore::open(&dir.path().join("presets.db")).unwrap();
    let mut registry = PresetRegistry::new(Arc::new(store));
    registry.initialize().unwrap();
    registry
}

#[test]
fn sled_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let expected: Vec<Preset> = {
        let mut registry = open(&dir);
        registry.add(PresetFields::new("X", "foo")).unwrap();
        assert!(registry.delete("claude-plan").unwrap());
        registry.presets().to_vec()
    };

    let registry = open(&dir);
    assert_eq!(registry.presets(), expected.as_slice());
    assert!(registry.get("claude-plan").is_none());
}

#[test]
fn deleting_everything_reseeds_on_next_start() {
    let dir = TempDir::new().unwrap();
    {
        let mut registry = open(&dir);
        for preset in default_presets() {
            registry.delete(&preset.id).unwrap();
        }
        assert!(registry.is_empty());
    }
    let registry = open(&dir);
    assert_eq!(registry.presets(), default_presets().as_slice());
}

#[test]
fn first_run_scenario() {
    let store = Arc::new(FlakyStore::new());
    let host = RecordingHost::default();
    let mut registry = PresetRegistry::new(store.clone());
    registry.initialize().unwrap();
    assert_eq!(registry.len(), 6);

    registry
        .add(PresetFields {
            name: Some("Reviewer".to_string()),
            command: Some("claude -p 'review'".to_string()),
            ..PresetFields::default()
        })
        .unwrap();
    let id = registry.presets()[6].id.clone();
    assert!(id.starts_with("custom-"));

    let outcome = registry.launch(&id, &host, &host).unwrap();
    assert!(matches!(outcome, LaunchOutcome::Launched { .. }));
    assert_eq!(*host.writes.lock(), vec!["claude -p 'review'\n".to_string()]);

    let bytes = store.get(PRESETS_KEY).unwrap().unwrap();
    let persisted: Vec<Preset> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persisted, registry.presets());
}

#[test]
fn ids_stay_unique_across_rapid_adds() {
    let mut registry = PresetRegistry::new(Arc::new(FlakyStore::new()));
    registry.initialize().unwrap();
    for i in 0..50 {
        registry
            .add(PresetFields::new(format!("P{i}"), "echo"))
            .unwrap();
    }
    let mut ids: Vec<&str> = registry.presets().iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 56);
}

#[test]
fn storage_failure_surfaces_as_storage_error() {
    let store = Arc::new(FlakyStore::new());
    let mut registry = PresetRegistry::new(store.clone());
    registry.initialize().unwrap();
    store.set_fail_writes(true);
    let err = registry.add(PresetFields::new("X", "foo")).unwrap_err();
    assert!(matches!(err, ApiError::StorageError(_)));
    assert_eq!(registry.len(), 6);
}

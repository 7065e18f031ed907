//! Application state controller: the single writer over the session state.
//!
//! The controller owns the source registry, the alert registry, the active
//! source id and the latest reading. Presentation code gets read snapshots
//! and calls the mutation methods below; it never touches the registries
//! directly. All mutations take the write lock, so a refresh tick and a user
//! action are serialized and cannot interleave mid-mutation.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    Alert, AlertRegistry, Profile, ReadingSource, SourceInfo, SourceRegistry, StateError, WaterData,
};

// ---

/// Session state. Exists only in memory; a restart reseeds it.
struct DashboardState {
    // ---
    sources: SourceRegistry,
    alerts: AlertRegistry,
    active_source_id: String,
    current_reading: WaterData,
    profile: Profile,
}

/// Read-only clone of the full session state, handed to presentation.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    // ---
    pub active_source_id: String,
    pub sources: Vec<SourceInfo>,
    pub alerts: Vec<Alert>,
    pub current_reading: WaterData,
    pub profile: Profile,
}

/// Cheaply cloneable handle; clones share the same underlying state.
#[derive(Clone)]
pub struct Controller {
    state: Arc<RwLock<DashboardState>>,
    reader: Arc<dyn ReadingSource>,
    changed: watch::Sender<()>,
}

impl Controller {
    /// Build the controller from seed data. The first seed source becomes
    /// active and its initial reading is generated synchronously, so the
    /// dashboard never observes a sourceless or readingless state.
    pub fn new(
        sources: Vec<SourceInfo>,
        alerts: Vec<Alert>,
        profile: Profile,
        reader: Arc<dyn ReadingSource>,
    ) -> Result<Self> {
        // ---
        let active_source_id = sources
            .first()
            .map(|s| s.id.clone())
            .ok_or_else(|| anyhow::anyhow!("at least one water source must be configured"))?;
        let current_reading = reader.generate(&active_source_id);
        let (changed, _) = watch::channel(());

        Ok(Self {
            state: Arc::new(RwLock::new(DashboardState {
                sources: SourceRegistry::new(sources),
                alerts: AlertRegistry::new(alerts),
                active_source_id,
                current_reading,
                profile,
            })),
            reader,
            changed,
        })
    }

    /// Subscribe to state-change notifications. Every committed mutation
    /// (selection, tick, registry change, profile edit) signals the channel,
    /// so a push-style presentation layer can re-render without polling.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.changed.subscribe()
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        // ---
        let state = self.state.read().await;
        StateSnapshot {
            active_source_id: state.active_source_id.clone(),
            sources: state.sources.as_slice().to_vec(),
            alerts: state.alerts.as_slice().to_vec(),
            current_reading: state.current_reading.clone(),
            profile: state.profile.clone(),
        }
    }

    /// Make `id` the active source and synchronously regenerate the reading
    /// for it. Selecting the already-active source is fine and still
    /// produces a fresh reading.
    pub async fn select_source(&self, id: &str) -> Result<WaterData, StateError> {
        // ---
        let mut state = self.state.write().await;
        if !state.sources.contains(id) {
            return Err(StateError::SourceNotFound { id: id.to_string() });
        }

        state.active_source_id = id.to_string();
        state.current_reading = self.reader.generate(id);
        info!("Active source set to '{}'", id);
        let _ = self.changed.send(());
        Ok(state.current_reading.clone())
    }

    /// One refresh of the live feed: regenerate the reading for whatever
    /// source is active. Never changes the active id. The reading is
    /// regenerated under the same lock that guards the active id, so a tick
    /// can never emit a reading for a superseded source.
    pub async fn tick(&self) {
        // ---
        let mut state = self.state.write().await;
        let id = state.active_source_id.clone();
        state.current_reading = self.reader.generate(&id);
        debug!("Refreshed reading for '{}'", id);
        let _ = self.changed.send(());
    }

    /// Register a new source. The active source and current reading are
    /// deliberately untouched.
    pub async fn add_source(&self, source: SourceInfo) {
        // ---
        let mut state = self.state.write().await;
        info!("Adding source '{}' ({})", source.name, source.id);
        state.sources.add(source);
        let _ = self.changed.send(());
    }

    /// Delete a source. Refused when it is the last one. If the deleted
    /// source was active, the first remaining source takes over and its
    /// reading is generated immediately.
    pub async fn delete_source(&self, id: &str) -> Result<(), StateError> {
        // ---
        let mut state = self.state.write().await;
        let removed = state.sources.remove(id)?;
        info!("Deleted source '{}'", removed.id);

        if state.active_source_id == removed.id {
            if let Some(next_id) = state.sources.first_id().map(str::to_string) {
                state.current_reading = self.reader.generate(&next_id);
                state.active_source_id = next_id.clone();
                info!("Active source reassigned to '{}'", next_id);
            }
        }
        let _ = self.changed.send(());
        Ok(())
    }

    /// Dismiss an alert. Unknown ids are ignored: the client may race a
    /// dismissal against a newer snapshot.
    pub async fn dismiss_alert(&self, id: &Uuid) {
        // ---
        let mut state = self.state.write().await;
        if state.alerts.dismiss(id) {
            info!("Dismissed alert {id}");
            let _ = self.changed.send(());
        } else {
            debug!("Dismiss for unknown alert {id} ignored");
        }
    }

    pub async fn update_profile(&self, profile: Profile) {
        // ---
        let mut state = self.state.write().await;
        info!("Profile updated for '{}'", profile.name);
        state.profile = profile;
        let _ = self.changed.send(());
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::{Severity, SourceStatus};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Deterministic stand-in for the random generator: encodes the source
    /// id into `timestamp` and a call counter into `tds`, so tests can check
    /// which source a reading was generated for and that it is fresh.
    struct StubSource {
        calls: AtomicU32,
    }

    impl StubSource {
        fn new() -> Self {
            Self { calls: AtomicU32::new(0) }
        }
    }

    impl ReadingSource for StubSource {
        fn generate(&self, source_id: &str) -> WaterData {
            // ---
            let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
            WaterData {
                tds: call as f32,
                turbidity: 1.0,
                temperature: 20.0,
                estimated_ph: 7.0,
                health_score: 100.0,
                timestamp: source_id.to_string(),
            }
        }
    }

    fn make_source(id: &str) -> SourceInfo {
        // ---
        SourceInfo {
            id: id.to_string(),
            name: id.to_string(),
            device_id: format!("AQ-{id}"),
            location: "Test Bench".to_string(),
            usage_type: "Testing".to_string(),
            status: SourceStatus::Online,
            signal_strength: 70,
        }
    }

    fn make_alert(title: &str) -> Alert {
        // ---
        Alert {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "test alert".to_string(),
            source: "Test Bench".to_string(),
            severity: Severity::Info,
            timestamp: "just now".to_string(),
        }
    }

    fn test_controller(source_ids: &[&str], alerts: Vec<Alert>) -> Controller {
        // ---
        let sources = source_ids.iter().map(|id| make_source(id)).collect();
        let profile = Profile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };
        Controller::new(sources, alerts, profile, Arc::new(StubSource::new())).unwrap()
    }

    #[tokio::test]
    async fn test_initial_state() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);
        let snapshot = controller.snapshot().await;

        assert_eq!(snapshot.active_source_id, "a");
        // Initial reading was generated for the initial active source
        assert_eq!(snapshot.current_reading.timestamp, "a");
        assert_eq!(snapshot.sources.len(), 2);
    }

    #[test]
    fn test_requires_at_least_one_seed_source() {
        // ---
        let profile = Profile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };
        assert!(Controller::new(vec![], vec![], profile, Arc::new(StubSource::new())).is_err());
    }

    #[tokio::test]
    async fn test_select_source() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);

        let reading = controller.select_source("b").await.unwrap();
        assert_eq!(reading.timestamp, "b");

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.active_source_id, "b");
        assert_eq!(snapshot.current_reading.timestamp, "b");

        // Re-selecting the active source succeeds and regenerates
        let first_tds = snapshot.current_reading.tds;
        let again = controller.select_source("b").await.unwrap();
        assert_eq!(again.timestamp, "b");
        assert!(again.tds > first_tds);
    }

    #[tokio::test]
    async fn test_select_unknown_source() {
        // ---
        let controller = test_controller(&["a"], vec![]);

        let err = controller.select_source("zzz").await.unwrap_err();
        assert_eq!(err, StateError::SourceNotFound { id: "zzz".to_string() });

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.active_source_id, "a");
    }

    #[tokio::test]
    async fn test_tick_refreshes_without_changing_active_source() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);
        let before = controller.snapshot().await;

        controller.tick().await;

        let after = controller.snapshot().await;
        assert_eq!(after.active_source_id, before.active_source_id);
        assert_eq!(after.current_reading.timestamp, "a");
        assert!(after.current_reading.tds > before.current_reading.tds);
    }

    #[tokio::test]
    async fn test_add_source_leaves_selection_alone() {
        // ---
        let controller = test_controller(&["a"], vec![]);
        let before = controller.snapshot().await;

        controller.add_source(make_source("c")).await;

        let after = controller.snapshot().await;
        assert_eq!(after.sources.len(), 2);
        assert_eq!(after.active_source_id, "a");
        assert_eq!(after.current_reading.tds, before.current_reading.tds);
    }

    #[tokio::test]
    async fn test_delete_active_source_reassigns() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);

        controller.delete_source("a").await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.sources.len(), 1);
        assert_eq!(snapshot.active_source_id, "b");
        // Reading was regenerated for the new active source
        assert_eq!(snapshot.current_reading.timestamp, "b");
    }

    #[tokio::test]
    async fn test_delete_inactive_source_keeps_selection() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);
        let before = controller.snapshot().await;

        controller.delete_source("b").await.unwrap();

        let after = controller.snapshot().await;
        assert_eq!(after.active_source_id, "a");
        assert_eq!(after.current_reading.tds, before.current_reading.tds);
    }

    #[tokio::test]
    async fn test_delete_last_source_is_refused() {
        // ---
        let controller = test_controller(&["a"], vec![]);

        let err = controller.delete_source("a").await.unwrap_err();
        assert_eq!(err, StateError::LastSource);

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.sources.len(), 1);
        assert_eq!(snapshot.active_source_id, "a");
    }

    #[tokio::test]
    async fn test_dismiss_alert() {
        // ---
        let alerts = vec![make_alert("one"), make_alert("two")];
        let target = alerts[0].id;
        let controller = test_controller(&["a"], alerts);

        controller.dismiss_alert(&target).await;
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.alerts.len(), 1);
        assert!(snapshot.alerts.iter().all(|a| a.id != target));

        // Unknown id: count unchanged
        controller.dismiss_alert(&Uuid::new_v4()).await;
        assert_eq!(controller.snapshot().await.alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_mutations_signal_subscribers() {
        // ---
        let controller = test_controller(&["a", "b"], vec![]);
        let mut rx = controller.subscribe();

        controller.tick().await;
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        controller.select_source("b").await.unwrap();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        // A rejected mutation signals nothing
        controller.dismiss_alert(&Uuid::new_v4()).await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_update_profile() {
        // ---
        let controller = test_controller(&["a"], vec![]);

        controller
            .update_profile(Profile {
                name: "Asha Verma".to_string(),
                email: "asha.v@aquasense.io".to_string(),
            })
            .await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.profile.name, "Asha Verma");
        assert_eq!(snapshot.profile.email, "asha.v@aquasense.io");
    }
}

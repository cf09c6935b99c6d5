//! Gift Registry Integration Tests
//!
//! Claim/release scenarios against the in-memory endpoint.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::domain::{ClaimState, GiftItem, ItemStatus, RegistryError};
    use crate::identity::{IdentityStore, MemoryIdentityStore};
    use crate::remote::MemoryEndpoint;
    use crate::sync::{Disposer, GiftRegistry, Notice, RegistryObserver, RegistrySnapshot, Sleeper};

    type Registry = GiftRegistry<MemoryEndpoint, MemoryIdentityStore>;

    #[derive(Default)]
    struct Recorder {
        notices: RefCell<Vec<Notice>>,
        snapshots: RefCell<Vec<RegistrySnapshot>>,
    }

    impl RegistryObserver for Recorder {
        fn on_change(&self, snapshot: &RegistrySnapshot) {
            self.snapshots.borrow_mut().push(snapshot.clone());
        }

        fn on_notice(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    impl Recorder {
        fn notices(&self) -> Vec<Notice> {
            self.notices.borrow().clone()
        }
    }

    fn gift(id: &str) -> GiftItem {
        GiftItem::new(id, format!("Gift {}", id))
    }

    fn taken_by(id: &str, owner: &str) -> GiftItem {
        GiftItem {
            taken: true,
            taken_by: owner.to_string(),
            ..gift(id)
        }
    }

    fn device(endpoint: &MemoryEndpoint, identity: &str) -> (Registry, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let registry = GiftRegistry::new(
            endpoint.clone(),
            MemoryIdentityStore::with_value(identity),
            recorder.clone(),
            Duration::from_secs(20),
        );
        (registry, recorder)
    }

    #[tokio::test]
    async fn test_init_loads_list() {
        let endpoint = MemoryEndpoint::new(vec![gift("1"), gift("2")]);
        let (registry, recorder) = device(&endpoint, "device-x");

        registry.init().await.expect("init failed");

        let snapshot = registry.snapshot();
        assert!(snapshot.loaded);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(endpoint.fetch_count(), 1);
        // loading shown, then cleared
        let seen = recorder.snapshots.borrow();
        assert!(seen.first().unwrap().loading);
        assert!(!seen.last().unwrap().loading);
    }

    #[tokio::test]
    async fn test_claim_is_optimistic_then_confirmed() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        x.set_claim("1", true).await.expect("claim failed");

        // First change after the load is the optimistic one
        let optimistic = recorder
            .snapshots
            .borrow()
            .iter()
            .find(|s| !s.pending.is_empty())
            .cloned()
            .expect("no optimistic snapshot");
        assert_eq!(optimistic.status("1"), Some(ItemStatus::PendingClaim));
        assert_eq!(optimistic.claim_state("1"), Some(ClaimState::ClaimedByMe));
        assert_eq!(optimistic.item("1").unwrap().taken_by, "device-x");

        let snapshot = x.snapshot();
        assert_eq!(snapshot.status("1"), Some(ItemStatus::ClaimedByMe));
        assert_eq!(snapshot.item("1").unwrap().taken_by, "device-x");
        assert_eq!(endpoint.item("1").unwrap().taken_by, "device-x");
        assert_eq!(recorder.notices(), vec![Notice::Claimed { name: "Gift 1".to_string() }]);
    }

    #[tokio::test]
    async fn test_claim_on_other_holder_sends_nothing() {
        let endpoint = MemoryEndpoint::new(vec![taken_by("1", "device-y")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        let before = x.snapshot().items;

        let err = x.set_claim("1", true).await.unwrap_err();

        assert_eq!(err, RegistryError::ClaimedByOther("1".to_string()));
        assert!(endpoint.toggles().is_empty());
        assert_eq!(x.snapshot().items, before);
        assert_eq!(recorder.notices(), vec![Notice::ClaimRejected { name: "Gift 1".to_string() }]);
    }

    #[tokio::test]
    async fn test_unattributed_claim_is_locked() {
        let endpoint = MemoryEndpoint::new(vec![taken_by("1", "")]);
        let (x, _) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        assert_eq!(x.status("1"), Some(ItemStatus::ClaimedByOther));
        assert!(x.set_claim("1", false).await.is_err());
        assert!(endpoint.toggles().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_claim_rolls_back() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        endpoint.script_toggle(Err(RegistryError::Server(Some("Sheet busy".to_string()))));

        let err = x.set_claim("1", true).await.unwrap_err();

        assert_eq!(err.server_message(), Some("Sheet busy"));
        let snapshot = x.snapshot();
        assert_eq!(snapshot.status("1"), Some(ItemStatus::Unclaimed));
        assert_eq!(snapshot.item("1").unwrap().taken_by, "");
        assert!(snapshot.pending.is_empty());
        assert!(recorder.notices().iter().any(|n| matches!(
            n,
            Notice::ToggleFailed { error: RegistryError::Server(Some(msg)), .. } if msg == "Sheet busy"
        )));
    }

    #[tokio::test]
    async fn test_timeout_rolls_back() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        endpoint.script_toggle(Err(RegistryError::Timeout));

        assert_eq!(x.set_claim("1", true).await, Err(RegistryError::Timeout));
        assert_eq!(x.status("1"), Some(ItemStatus::Unclaimed));
    }

    #[tokio::test]
    async fn test_failed_resync_restores_item() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        endpoint.script_toggle(Err(RegistryError::Transport("offline".to_string())));
        endpoint.script_fetch(0, Err(RegistryError::Transport("offline".to_string())));

        assert!(x.set_claim("1", true).await.is_err());

        assert_eq!(x.status("1"), Some(ItemStatus::Unclaimed));
        let errors = recorder.notices().iter().filter(|n| n.is_error()).count();
        assert_eq!(errors, 2);
    }

    #[tokio::test]
    async fn test_optimistic_claim_yields_to_server_truth() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        // Acknowledged, but the sheet ends up attributing the item elsewhere
        endpoint.script_toggle(Ok(()));
        endpoint.set_item(taken_by("1", "device-y"));
        x.set_claim("1", true).await.unwrap();

        assert_eq!(x.snapshot().claim_state("1"), Some(ClaimState::ClaimedByOther));
    }

    #[tokio::test]
    async fn test_release_clears_owner() {
        let endpoint = MemoryEndpoint::new(vec![taken_by("1", "device-x")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        assert_eq!(x.status("1"), Some(ItemStatus::ClaimedByMe));

        x.set_claim("1", false).await.unwrap();

        let sent = endpoint.toggles();
        assert_eq!(sent.len(), 1);
        assert!(!sent[0].taken);
        assert_eq!(sent[0].taken_by, "");
        let item = x.snapshot().item("1").cloned().unwrap();
        assert!(!item.taken);
        assert_eq!(item.taken_by, "");
        assert_eq!(recorder.notices(), vec![Notice::Released { name: "Gift 1".to_string() }]);
    }

    #[tokio::test]
    async fn test_race_is_decided_by_server() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        let (y, y_recorder) = device(&endpoint, "device-y");
        x.init().await.unwrap();
        y.init().await.unwrap();
        assert_eq!(y.status("1"), Some(ItemStatus::Unclaimed));

        x.set_claim("1", true).await.unwrap();
        // y still sees the stale list and tries anyway
        let err = y.set_claim("1", true).await.unwrap_err();

        assert!(matches!(err, RegistryError::Server(_)));
        assert_eq!(x.status("1"), Some(ItemStatus::ClaimedByMe));
        assert_eq!(y.status("1"), Some(ItemStatus::ClaimedByOther));
        assert!(y_recorder.notices().iter().any(|n| matches!(n, Notice::ToggleFailed { .. })));
    }

    #[tokio::test]
    async fn test_interleaved_race_is_decided_by_server() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        endpoint.set_toggle_delay(1);
        let (x, _) = device(&endpoint, "device-x");
        let (y, _) = device(&endpoint, "device-y");
        x.init().await.unwrap();
        y.init().await.unwrap();

        let (rx, ry) = tokio::join!(x.set_claim("1", true), y.set_claim("1", true));

        // Both went out optimistically; exactly one is accepted
        assert_eq!(endpoint.toggles().len(), 2);
        assert_ne!(rx.is_ok(), ry.is_ok());
        let (winner, loser) = if rx.is_ok() { (&x, &y) } else { (&y, &x) };
        assert_eq!(winner.status("1"), Some(ItemStatus::ClaimedByMe));
        assert_eq!(loser.status("1"), Some(ItemStatus::ClaimedByOther));
    }

    #[tokio::test]
    async fn test_second_toggle_while_pending_is_refused() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        endpoint.set_toggle_delay(2);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        let (first, second) = tokio::join!(x.set_claim("1", true), x.set_claim("1", false));

        assert!(first.is_ok());
        assert_eq!(second, Err(RegistryError::Pending("1".to_string())));
        assert_eq!(endpoint.toggles().len(), 1);
        assert!(recorder.notices().contains(&Notice::Busy { name: "Gift 1".to_string() }));
        assert_eq!(x.status("1"), Some(ItemStatus::ClaimedByMe));
    }

    #[tokio::test]
    async fn test_toggle_to_current_state_is_noop() {
        let endpoint = MemoryEndpoint::new(vec![gift("1"), taken_by("2", "device-x")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        assert!(x.set_claim("1", false).await.is_ok());
        assert!(x.set_claim("2", true).await.is_ok());
        assert!(endpoint.toggles().is_empty());
        assert!(recorder.notices().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        let err = x.set_claim("nope", true).await.unwrap_err();
        assert_eq!(err, RegistryError::UnknownItem("nope".to_string()));
        assert!(endpoint.toggles().is_empty());
        assert_eq!(recorder.notices(), vec![Notice::UnknownItem { id: "nope".to_string() }]);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let endpoint = MemoryEndpoint::new(vec![gift("1"), taken_by("2", "device-y")]);
        let (x, recorder) = device(&endpoint, "device-x");
        x.init().await.unwrap();
        let before = x.snapshot();

        endpoint.script_fetch(0, Err(RegistryError::Malformed("expected value".to_string())));
        assert!(x.load_list(false).await.is_err());

        let after = x.snapshot();
        assert_eq!(after.items, before.items);
        assert!(!after.loading);
        assert_eq!(
            recorder.notices(),
            vec![Notice::LoadFailed(RegistryError::Malformed("expected value".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let endpoint = MemoryEndpoint::new(vec![]);
        let (x, _) = device(&endpoint, "device-x");
        endpoint.script_fetch(3, Ok(vec![gift("old")]));
        endpoint.script_fetch(0, Ok(vec![gift("new")]));

        let (first, second) = tokio::join!(x.load_list(true), x.load_list(true));

        assert!(first.is_ok() && second.is_ok());
        let ids: Vec<_> = x.snapshot().items.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["new".to_string()]);
    }

    #[tokio::test]
    async fn test_identity_created_on_first_claim() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let store = MemoryIdentityStore::new();
        let registry = GiftRegistry::new(
            endpoint.clone(),
            store.clone(),
            Rc::new(Recorder::default()),
            Duration::from_secs(20),
        );
        registry.init().await.unwrap();
        assert!(registry.snapshot().identity.is_none());
        assert!(store.load().is_none());

        registry.set_claim("1", true).await.unwrap();

        let stored = store.load().expect("identity not persisted");
        assert_eq!(endpoint.toggles()[0].taken_by, stored);
        assert_eq!(registry.identity().as_str(), stored);
        assert_eq!(registry.status("1"), Some(ItemStatus::ClaimedByMe));
    }

    #[tokio::test]
    async fn test_groups_carry_status() {
        let endpoint = MemoryEndpoint::new(vec![
            gift("1").with_category(Some("Kuhinja")),
            taken_by("2", "device-y"),
            taken_by("3", "device-x").with_category(Some("Kuhinja")),
        ]);
        let (x, _) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        let groups = x.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Kuhinja");
        let statuses: Vec<_> = groups[0].gifts.iter().map(|g| g.status).collect();
        assert_eq!(statuses, vec![ItemStatus::Unclaimed, ItemStatus::ClaimedByMe]);
        assert_eq!(groups[1].category, "Other");
        assert_eq!(groups[1].gifts[0].status, ItemStatus::ClaimedByOther);
    }

    struct CountingSleeper {
        ticks: Cell<usize>,
        stop_after: usize,
        disposer: Disposer,
    }

    #[async_trait(?Send)]
    impl Sleeper for CountingSleeper {
        async fn sleep(&self, duration: Duration) {
            assert_eq!(duration, Duration::from_secs(20));
            self.ticks.set(self.ticks.get() + 1);
            if self.ticks.get() > self.stop_after {
                self.disposer.dispose();
            }
        }
    }

    #[tokio::test]
    async fn test_polling_stops_after_dispose() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        let sleeper = CountingSleeper {
            ticks: Cell::new(0),
            stop_after: 3,
            disposer: x.disposer(),
        };

        x.run_polling(sleeper).await;

        assert!(x.is_disposed());
        assert_eq!(endpoint.fetch_count(), 3);
        assert!(x.snapshot().loaded);
    }

    #[tokio::test]
    async fn test_poll_picks_up_other_devices() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        x.init().await.unwrap();

        endpoint.set_item(taken_by("1", "device-y"));
        let sleeper = CountingSleeper {
            ticks: Cell::new(0),
            stop_after: 1,
            disposer: x.disposer(),
        };
        x.run_polling(sleeper).await;

        assert_eq!(x.status("1"), Some(ItemStatus::ClaimedByOther));
    }

    #[tokio::test]
    async fn test_disposed_registry_does_not_poll() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        let (x, _) = device(&endpoint, "device-x");
        x.dispose();

        let sleeper = CountingSleeper {
            ticks: Cell::new(0),
            stop_after: 10,
            disposer: x.disposer(),
        };
        x.run_polling(sleeper).await;

        assert_eq!(endpoint.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_overlapping_loads_keep_loading_until_last_finishes() {
        let endpoint = MemoryEndpoint::new(vec![gift("1")]);
        endpoint.script_fetch(5, Ok(vec![gift("1")]));
        endpoint.script_fetch(0, Ok(vec![gift("1"), gift("2")]));
        let (x, recorder) = device(&endpoint, "device-x");

        let (slow, fast) = tokio::join!(x.load_list(false), x.load_list(false));
        slow.unwrap();
        fast.unwrap();

        let seen = recorder.snapshots.borrow();
        // the fast load lands while the slow one is still out
        let first_loaded = seen.iter().find(|s| s.loaded).unwrap();
        assert!(first_loaded.loading);
        assert!(!seen.last().unwrap().loading);
        assert!(!x.snapshot().loading);
        assert_eq!(x.snapshot().items.len(), 2);
    }
}

//! Tests for the guest session tracker and its stores.

use solace_guest::{
    FileGuestStore, GuestPhase, GuestState, GuestStateStore, GuestTracker, MemoryGuestStore,
};

#[tokio::test]
async fn three_increments_reach_the_limit() {
    let mut tracker = GuestTracker::with_default_limit(MemoryGuestStore::new())
        .await
        .unwrap();

    assert_eq!(tracker.phase(), GuestPhase::Fresh);
    assert_eq!(tracker.increment().await.unwrap(), GuestPhase::Counting);
    assert_eq!(tracker.increment().await.unwrap(), GuestPhase::Counting);
    assert_eq!(tracker.increment().await.unwrap(), GuestPhase::LimitReached);
    assert!(tracker.limit_reached());
}

#[tokio::test]
async fn limit_reached_is_soft_terminal() {
    let mut tracker = GuestTracker::load(MemoryGuestStore::new(), 2).await.unwrap();

    tracker.increment().await.unwrap();
    tracker.increment().await.unwrap();

    // Further increments change nothing: no window, no expiry.
    for _ in 0..5 {
        assert_eq!(tracker.increment().await.unwrap(), GuestPhase::LimitReached);
    }
    assert_eq!(tracker.count(), 2);
}

#[tokio::test]
async fn reset_returns_to_fresh_and_clears_the_store() {
    let store = MemoryGuestStore::new();
    let mut tracker = GuestTracker::with_default_limit(store.clone()).await.unwrap();

    for _ in 0..3 {
        tracker.increment().await.unwrap();
    }
    assert_eq!(tracker.phase(), GuestPhase::LimitReached);

    tracker.reset().await.unwrap();

    assert_eq!(tracker.phase(), GuestPhase::Fresh);
    assert_eq!(tracker.count(), 0);
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn count_survives_a_tracker_reload() {
    let store = MemoryGuestStore::new();

    {
        let mut tracker = GuestTracker::with_default_limit(store.clone()).await.unwrap();
        tracker.increment().await.unwrap();
        tracker.increment().await.unwrap();
    }

    let tracker = GuestTracker::with_default_limit(store).await.unwrap();
    assert_eq!(tracker.count(), 2);
    assert_eq!(tracker.phase(), GuestPhase::Counting);
}

#[tokio::test]
async fn file_store_round_trips_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileGuestStore::new(dir.path().join("guest_session.json"));

    assert!(store.load().await.unwrap().is_none());

    store.save(&GuestState { count: 2 }).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(GuestState { count: 2 }));

    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
    // Clearing an already-empty store is fine.
    store.clear().await.unwrap();
}

#[tokio::test]
async fn file_store_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileGuestStore::new(dir.path().join("nested/deeper/guest_session.json"));

    store.save(&GuestState { count: 1 }).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(GuestState { count: 1 }));
}

#[tokio::test]
async fn tracker_persists_across_restarts_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guest_session.json");

    {
        let mut tracker = GuestTracker::with_default_limit(FileGuestStore::new(&path))
            .await
            .unwrap();
        tracker.increment().await.unwrap();
        tracker.increment().await.unwrap();
        tracker.increment().await.unwrap();
    }

    // A new process sees the exhausted allowance.
    let tracker = GuestTracker::with_default_limit(FileGuestStore::new(&path))
        .await
        .unwrap();
    assert!(tracker.limit_reached());
    assert_eq!(tracker.phase(), GuestPhase::LimitReached);
}

#[tokio::test]
async fn corrupt_state_file_is_a_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guest_session.json");
    tokio::fs::write(&path, b"not json").await.unwrap();

    let store = FileGuestStore::new(&path);
    assert!(store.load().await.is_err());
}

use crate::ProfileStore;
use crate::tests::profile;

use pp_client::{Client, ClientError};

fn store() -> ProfileStore {
    ProfileStore::new(Client::new("http://127.0.0.1:9"))
}

#[test]
fn test_snapshot_starts_empty() {
    let store = store();

    assert!(store.snapshot().is_empty());
    assert!(!store.is_loading());
}

#[test]
fn test_successful_reload_replaces_snapshot() {
    let store = store();
    let generation = store.begin_reload();
    assert!(store.is_loading());

    let records = vec![profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z")];
    store.finish_reload(generation, Ok(records)).unwrap();

    assert!(!store.is_loading());
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn test_failed_reload_keeps_previous_snapshot() {
    let store = store();

    let records = vec![profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z")];
    let generation = store.begin_reload();
    store.finish_reload(generation, Ok(records)).unwrap();

    let generation = store.begin_reload();
    let result = store.finish_reload(generation, Err(ClientError::api(500, "boom".to_string())));

    assert!(result.is_err());
    assert!(!store.is_loading());
    assert_eq!(store.snapshot().len(), 1, "stale snapshot must survive a failed reload");
}

#[test]
fn test_stale_response_does_not_clobber_newer_one() {
    let store = store();

    // Two overlapping reloads; the newer one resolves first.
    let older = store.begin_reload();
    let newer = store.begin_reload();

    let fresh = vec![
        profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z"),
        profile("Grace", "Hopper", "grace@x.com", &[], "2024-02-01T00:00:00Z"),
    ];
    store.finish_reload(newer, Ok(fresh)).unwrap();

    let stale = vec![profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z")];
    store.finish_reload(older, Ok(stale)).unwrap();

    assert_eq!(store.snapshot().len(), 2, "stale response must be discarded");
}

#[test]
fn test_overlapping_reloads_converge_in_order() {
    let store = store();

    let first = store.begin_reload();
    let second = store.begin_reload();
    assert!(store.is_loading());

    store
        .finish_reload(first, Ok(vec![profile("A", "A", "a@x.com", &[], "2024-01-01T00:00:00Z")]))
        .unwrap();
    store
        .finish_reload(
            second,
            Ok(vec![
                profile("A", "A", "a@x.com", &[], "2024-01-01T00:00:00Z"),
                profile("B", "B", "b@x.com", &[], "2024-01-02T00:00:00Z"),
            ]),
        )
        .unwrap();

    assert!(!store.is_loading());
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn test_subscribers_observe_replacement() {
    let store = store();
    let rx = store.subscribe();

    let generation = store.begin_reload();
    store
        .finish_reload(
            generation,
            Ok(vec![profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z")]),
        )
        .unwrap();

    assert_eq!(rx.borrow().len(), 1);
}

#[test]
fn test_detached_subscriber_is_harmless() {
    let store = store();
    drop(store.subscribe());

    let generation = store.begin_reload();
    let result = store.finish_reload(
        generation,
        Ok(vec![profile("Ada", "Lovelace", "ada@x.com", &[], "2024-01-01T00:00:00Z")]),
    );

    assert!(result.is_ok());
    assert_eq!(store.snapshot().len(), 1);
}

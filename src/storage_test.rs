use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get(TOKEN_KEY), None);

    store.set(TOKEN_KEY, "t1");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));

    store.set(TOKEN_KEY, "t2");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t2"));

    store.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn memory_store_with_entry_seeds_value() {
    let store = MemoryStore::with_entry(TOKEN_KEY, "seed");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("seed"));
}

#[test]
fn removing_missing_key_is_harmless() {
    let store = MemoryStore::default();
    store.remove("missing");
    assert!(store.get("missing").is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_is_empty_outside_the_browser() {
    let store = LocalStore;
    store.set(TOKEN_KEY, "ignored");
    assert_eq!(store.get(TOKEN_KEY), None);
    store.remove(TOKEN_KEY);
}

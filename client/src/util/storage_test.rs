use super::*;
use routine_builder::SelectionStore;

// =============================================================
// Native fallback (no browser)
// =============================================================

#[test]
fn get_without_browser_is_empty() {
    assert_eq!(BrowserStorage.get("selectedProducts").unwrap(), None);
}

#[test]
fn writes_without_browser_are_accepted() {
    assert!(BrowserStorage.set("selectedProducts", "[]").is_ok());
    assert!(BrowserStorage.remove("selectedProducts").is_ok());
}

#[test]
fn selection_store_over_browser_storage_loads_empty() {
    let store = SelectionStore::new(BrowserStorage);
    store.save(&[]).unwrap();
    assert!(store.load().unwrap().is_empty());
}

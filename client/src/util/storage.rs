//! `localStorage` backend for the persisted selection.
//!
//! Requires a browser environment. Without the `csr` feature every read
//! comes back empty and every write is accepted and dropped, so the
//! controller runs natively with no persisted state.

use routine_builder::{KeyValueStore, StoreError};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Backend("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Backend(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Backend("localStorage unavailable".to_owned()))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

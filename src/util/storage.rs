//! Browser `localStorage` backing for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the form engine's `TokenStore` port so forms never touch
//! `web-sys` directly. Builds without `csr` report storage as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use forms::{StorageError, TokenStore};

/// [`TokenStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

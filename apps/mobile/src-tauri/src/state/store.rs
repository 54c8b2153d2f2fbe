//! # Store State
//!
//! Wrapper around the device store handle so commands can take it via
//! `tauri::State`. The underlying pool is cheaply cloneable, so the
//! wrapper just hands out references.
//!
//! ## Usage in Commands
//! `tauri::State` has its own inherent `inner()`, which shadows the
//! wrapper's. Commands must deref the state first:
//! ```rust,ignore
//! let store_inner: &Store = (*store).inner();
//! let products = store_inner.catalog().list_products().await?;
//! ```

use grocemate_store::Store;

/// Managed store handle, registered during setup.
#[derive(Debug)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the store handle.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocemate_store::StoreConfig;

    // The wrapper's inner() must hand back the Store itself, so that
    // repository accessors resolve on it and not on the wrapper.
    #[tokio::test]
    async fn inner_exposes_store_repositories() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let state = StoreState::new(store);

        let inner: &Store = state.inner();
        assert!(inner.catalog().list_products().await.unwrap().is_empty());
        assert!(inner.orders().list().await.unwrap().is_empty());
    }
}
